use std::path::PathBuf;

use invrec_model::OutputRole;

/// Destination directory for the six report files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub dir: PathBuf,
}

impl OutputLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, role: OutputRole) -> PathBuf {
        self.dir.join(role.file_name())
    }
}

/// A report file that has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub role: OutputRole,
    pub path: PathBuf,
    pub rows: usize,
}
