//! Where a run's input tables live and how they are loaded.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use invrec_model::{InputRole, ReconcileInputs, Result};

use crate::csv_table::read_csv_table;

/// Input folder plus the per-run name of the cleaned supplier file.
///
/// The other three inputs use fixed names inside the folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLayout {
    pub folder: PathBuf,
    pub clean_file: String,
}

impl InputLayout {
    pub fn new(folder: impl Into<PathBuf>, clean_file: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            clean_file: clean_file.into(),
        }
    }

    pub fn path(&self, role: InputRole) -> PathBuf {
        match role.default_file_name() {
            Some(name) => self.folder.join(name),
            None => self.folder.join(&self.clean_file),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

/// Load all four input tables.
///
/// Every input must be present and parse; the first failure aborts loading.
pub fn load_inputs(layout: &InputLayout) -> Result<ReconcileInputs> {
    let start = Instant::now();
    let mut inputs = ReconcileInputs::default();
    for role in InputRole::ALL {
        let path = layout.path(role);
        let table = read_csv_table(&path, role)?;
        debug!(
            role = %role,
            path = %path.display(),
            rows = table.len(),
            columns = table.width(),
            "loaded input"
        );
        *inputs.table_mut(role) = table;
    }
    let rows = |role: InputRole| inputs.table(role).len();
    info!(
        folder = %layout.folder.display(),
        supplier_rows = rows(InputRole::SupplierCatalog),
        known_skus = rows(InputRole::KnownSkuSet),
        storefront_rows = rows(InputRole::StorefrontCatalog),
        onboarding_rows = rows(InputRole::OnboardingQueue),
        duration_ms = start.elapsed().as_millis(),
        "inputs loaded"
    );
    Ok(inputs)
}
