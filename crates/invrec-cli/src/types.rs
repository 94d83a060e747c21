use std::path::PathBuf;

use serde::Serialize;

use invrec_model::{OutputRole, SkippedRow};

/// Outcome of one `reconcile` command.
#[derive(Debug)]
pub struct RunResult {
    pub input_folder: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub outputs: Vec<OutputSummary>,
    pub skipped_rows: Vec<SkippedRow>,
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSummary {
    pub role: OutputRole,
    pub file: String,
    pub rows: usize,
    #[serde(skip)]
    pub path: PathBuf,
    #[serde(skip)]
    pub written: bool,
}

/// Machine-readable run summary written by `--summary-json`.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub input_folder: String,
    pub generated_at: String,
    pub dry_run: bool,
    pub outputs: &'a [OutputSummary],
    pub skipped_rows: &'a [SkippedRow],
}
