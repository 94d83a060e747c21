//! Writing tables as CSV.
//!
//! A report is written in two phases. Every table is first staged as a
//! temporary file next to its destination; only when all six are staged are
//! they renamed into place. A failure while staging removes the temporary
//! files and leaves existing outputs untouched.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use csv::{Terminator, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use invrec_model::{OutputRole, ReconcileError, ReconcileReport, Result, Table};

use crate::layout::{OutputLayout, WrittenFile};

fn output_error(path: &Path, source: io::Error) -> ReconcileError {
    ReconcileError::Output {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `table` as CSV: one header row, then the data rows, no index column.
pub fn write_csv<W: Write>(writer: W, table: &Table) -> io::Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()
}

struct Staged {
    role: OutputRole,
    file: NamedTempFile,
    target: PathBuf,
    rows: usize,
}

fn stage(dir: &Path, role: OutputRole, table: &Table, target: PathBuf) -> Result<Staged> {
    let mut file = tempfile::Builder::new()
        .prefix(".invrec-")
        .suffix(".csv.tmp")
        .tempfile_in(dir)
        .map_err(|source| output_error(&target, source))?;
    write_csv(file.as_file_mut(), table).map_err(|source| output_error(&target, source))?;
    file.as_file()
        .sync_all()
        .map_err(|source| output_error(&target, source))?;
    debug!(file = role.file_name(), rows = table.len(), "staged output");
    Ok(Staged {
        role,
        file,
        target,
        rows: table.len(),
    })
}

/// Write all six report tables into `layout`, replacing existing files.
pub fn write_report(report: &ReconcileReport, layout: &OutputLayout) -> Result<Vec<WrittenFile>> {
    let start = Instant::now();
    fs::create_dir_all(&layout.dir).map_err(|source| output_error(&layout.dir, source))?;

    for role in OutputRole::ALL {
        let target = layout.path(role);
        if target.is_dir() {
            return Err(output_error(
                &target,
                io::Error::other("destination is a directory"),
            ));
        }
    }

    let mut staged = Vec::with_capacity(OutputRole::ALL.len());
    for (role, table) in report.tables() {
        staged.push(stage(&layout.dir, role, table, layout.path(role))?);
    }

    let mut written = Vec::with_capacity(staged.len());
    for Staged {
        role,
        file,
        target,
        rows,
    } in staged
    {
        file.persist(&target)
            .map_err(|error| output_error(&target, error.error))?;
        written.push(WrittenFile {
            role,
            path: target,
            rows,
        });
    }
    info!(
        dir = %layout.dir.display(),
        files = written.len(),
        duration_ms = start.elapsed().as_millis(),
        "outputs written"
    );
    Ok(written)
}
