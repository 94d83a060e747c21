use serde::{Deserialize, Serialize};

use crate::roles::{InputRole, OutputRole};
use crate::table::Table;

/// A catalog row left out of the per-size expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub role: InputRole,
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub sku: String,
    pub sizes: String,
    pub quantities: String,
}

/// The six tables derived by one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub new_products_one_size: Table,
    pub new_products_multi_size: Table,
    pub known_skus: Table,
    pub zero_inventory: Table,
    pub qty_mismatches: Table,
    pub cost_mismatches: Table,
    pub skipped_rows: Vec<SkippedRow>,
}

impl ReconcileReport {
    pub fn table(&self, role: OutputRole) -> &Table {
        match role {
            OutputRole::NewProductsOneSize => &self.new_products_one_size,
            OutputRole::NewProductsMultiSize => &self.new_products_multi_size,
            OutputRole::KnownSkus => &self.known_skus,
            OutputRole::ZeroInventory => &self.zero_inventory,
            OutputRole::QtyMismatches => &self.qty_mismatches,
            OutputRole::CostMismatches => &self.cost_mismatches,
        }
    }

    /// All output tables in [`OutputRole::ALL`] order.
    pub fn tables(&self) -> impl Iterator<Item = (OutputRole, &Table)> + '_ {
        OutputRole::ALL
            .into_iter()
            .map(move |role| (role, self.table(role)))
    }

    pub fn row_counts(&self) -> Vec<(OutputRole, usize)> {
        self.tables().map(|(role, table)| (role, table.len())).collect()
    }
}
