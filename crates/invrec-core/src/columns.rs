//! Required-column resolution for the input tables.

use invrec_model::{InputRole, QTY, ReconcileError, Result, SIZE, SKU, Table, UNIT_COST};

/// Positions of the reconciled columns inside a catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogColumns {
    pub sku: usize,
    pub size: usize,
    pub qty: usize,
    pub unit_cost: usize,
}

impl CatalogColumns {
    /// Locate `SKU`, `Size`, `Qty` and `Unit Cost` by name.
    pub fn resolve(table: &Table, role: InputRole) -> Result<Self> {
        Ok(Self {
            sku: table.require_column(role, SKU)?,
            size: table.require_column(role, SIZE)?,
            qty: table.require_column(role, QTY)?,
            unit_cost: table.require_column(role, UNIT_COST)?,
        })
    }
}

/// Names the storefront export's four positional columns.
///
/// The export's own header text is ignored; only the column count matters.
pub fn remap_storefront_columns(table: &Table) -> Result<Table> {
    const NAMES: [&str; 4] = [SKU, SIZE, QTY, UNIT_COST];
    if table.width() != NAMES.len() {
        return Err(ReconcileError::ColumnCount {
            role: InputRole::StorefrontCatalog,
            expected: NAMES.len(),
            found: table.width(),
        });
    }
    let mut remapped = table.clone();
    remapped.headers = NAMES.iter().map(|name| (*name).to_string()).collect();
    Ok(remapped)
}
