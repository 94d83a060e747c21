use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use comfy_table::Table;
use tempfile::NamedTempFile;
use tracing::{info, info_span, warn};

use invrec_core::reconcile;
use invrec_ingest::{InputLayout, list_csv_files, load_inputs};
use invrec_model::{InputRole, OutputRole, ReconcileError, ReconcileOptions, ReconcileReport};
use invrec_output::{OutputLayout, write_report};

use crate::cli::ReconcileArgs;
use crate::summary::apply_table_style;
use crate::types::{OutputSummary, RunResult, RunSummary};

/// Print the report files a run produces.
pub fn run_outputs() {
    let mut table = Table::new();
    table.set_header(vec!["File", "Description"]);
    apply_table_style(&mut table);
    for role in OutputRole::ALL {
        table.add_row(vec![role.file_name(), role.description()]);
    }
    println!("{table}");
}

pub fn run_reconcile(args: &ReconcileArgs) -> Result<RunResult> {
    let input_folder = &args.input_folder;
    let span = info_span!("run", folder = %input_folder.display());
    let _guard = span.enter();
    let start = Instant::now();

    let layout = InputLayout::new(input_folder, &args.clean_file);
    let options = ReconcileOptions::new()
        .with_malformed_rows(args.on_malformed.into())
        .with_value_comparison(args.compare.into())
        .with_one_size_sentinel(args.one_size.as_str());

    let inputs = match load_inputs(&layout) {
        Ok(inputs) => inputs,
        Err(error) => {
            if let ReconcileError::MissingInput {
                role: InputRole::SupplierCatalog,
                ..
            } = &error
            {
                log_available_csv_files(layout.folder());
            }
            return Err(error)
                .with_context(|| format!("load inputs from {}", input_folder.display()));
        }
    };

    let report = reconcile(&inputs, &options).context("reconcile inputs")?;
    let output_dir = args.output_dir();
    let output_layout = OutputLayout::new(&output_dir);
    let mut result = RunResult {
        input_folder: input_folder.clone(),
        output_dir,
        dry_run: args.dry_run,
        outputs: planned_outputs(&report, &output_layout),
        skipped_rows: report.skipped_rows.clone(),
        summary_json: args.summary_json.clone(),
    };

    // Nothing is written unless the summary can be staged.
    let staged_summary = match &args.summary_json {
        Some(path) => Some(stage_summary_json(&result, path)?),
        None => None,
    };

    if args.dry_run {
        info!(dir = %result.output_dir.display(), "dry run, no files written");
    } else {
        write_report(&report, &output_layout)
            .with_context(|| format!("write reports to {}", result.output_dir.display()))?;
        for output in &mut result.outputs {
            output.written = true;
        }
    }

    if let (Some(staged), Some(path)) = (staged_summary, &args.summary_json) {
        match staged.persist(path) {
            Ok(_) => info!(path = %path.display(), "run summary written"),
            Err(error) => warn!(
                path = %path.display(),
                error = %error.error,
                "run summary not written"
            ),
        }
    }
    info!(
        duration_ms = start.elapsed().as_millis(),
        skipped_rows = result.skipped_rows.len(),
        "run complete"
    );
    Ok(result)
}

fn planned_outputs(report: &ReconcileReport, layout: &OutputLayout) -> Vec<OutputSummary> {
    report
        .tables()
        .map(|(role, table)| OutputSummary {
            role,
            file: role.file_name().to_string(),
            rows: table.len(),
            path: layout.path(role),
            written: false,
        })
        .collect()
}

fn log_available_csv_files(folder: &Path) {
    match list_csv_files(folder) {
        Ok(files) => {
            let names: Vec<String> = files
                .iter()
                .filter_map(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .collect();
            warn!(
                folder = %folder.display(),
                available = %names.join(", "),
                "supplier file not found"
            );
        }
        Err(error) => warn!(%error, "cannot list input folder"),
    }
}

/// Serialize the run summary into a temp file next to `path`.
fn stage_summary_json(result: &RunResult, path: &Path) -> Result<NamedTempFile> {
    let summary = RunSummary {
        input_folder: result.input_folder.display().to_string(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        dry_run: result.dry_run,
        outputs: &result.outputs,
        skipped_rows: &result.skipped_rows,
    };
    let json = serde_json::to_string_pretty(&summary).context("serialize run summary")?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::Builder::new()
        .prefix(".invrec-summary-")
        .suffix(".json.tmp")
        .tempfile_in(dir)
        .with_context(|| format!("stage run summary {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("stage run summary {}", path.display()))?;
    Ok(file)
}
