use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use invrec_model::{InputRole, ReconcileError, Result, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn parse_error(role: InputRole, path: &Path, message: impl Into<String>) -> ReconcileError {
    ReconcileError::Parse {
        role,
        path: path.to_path_buf(),
        message: message.into(),
    }
}

/// Read a headed CSV file into a [`Table`].
///
/// Header names are whitespace-normalized; cell values are kept exactly as
/// captured. Rows shorter than the header are padded with empty cells, rows
/// longer than the header are rejected.
pub fn read_csv_table(path: &Path, role: InputRole) -> Result<Table> {
    let file = File::open(path).map_err(|source| ReconcileError::MissingInput {
        role,
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| parse_error(role, path, error.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut table = Table::new(headers);
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|error| parse_error(role, path, error.to_string()))?;
        if record.len() > table.width() {
            return Err(parse_error(
                role,
                path,
                format!(
                    "row {} has {} fields but the header has {}",
                    idx + 1,
                    record.len(),
                    table.width()
                ),
            ));
        }
        table.push_row(record.iter().map(str::to_string).collect());
    }
    Ok(table)
}
