use std::path::PathBuf;

use thiserror::Error;

use crate::roles::InputRole;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("missing input {role}: {path}")]
    MissingInput {
        role: InputRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read input folder {path}")]
    InputFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {role} ({path}): {message}")]
    Parse {
        role: InputRole,
        path: PathBuf,
        message: String,
    },
    #[error("{role} is missing required column `{column}`")]
    MissingColumn { role: InputRole, column: String },
    #[error("{role} must have exactly {expected} columns, found {found}")]
    ColumnCount {
        role: InputRole,
        expected: usize,
        found: usize,
    },
    #[error(
        "{role} row {row} (SKU {sku}): sizes `{sizes}` and quantities `{quantities}` have different lengths"
    )]
    MalformedRow {
        role: InputRole,
        row: usize,
        sku: String,
        sizes: String,
        quantities: String,
    },
    #[error("failed to write {path}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
