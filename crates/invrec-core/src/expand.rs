//! Per-size expansion of catalog rows.
//!
//! Catalog rows carry all sizes of a SKU in one delimited `Size` cell and the
//! matching quantities, position for position, in one delimited `Qty` cell.
//! Expansion turns each row into one `(SKU, Size, Qty)` row per size.

use tracing::warn;

use invrec_model::{
    InputRole, MalformedRowPolicy, QTY, ReconcileError, Result, SIZE, SKU, SkippedRow, Table, field,
};

use crate::columns::CatalogColumns;

/// Expanded rows plus the source rows left out under [`MalformedRowPolicy::Skip`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    pub rows: Table,
    pub skipped: Vec<SkippedRow>,
}

/// Split `Size` and `Qty` on `delimiter` and pair them positionally.
///
/// Output order is source row order, then size order within the row. Tokens
/// are not trimmed. A row whose lists differ in length either fails the
/// expansion or is skipped, depending on `policy`.
pub fn expand_sizes(
    table: &Table,
    columns: &CatalogColumns,
    delimiter: char,
    role: InputRole,
    policy: MalformedRowPolicy,
) -> Result<Expansion> {
    let mut expansion = Expansion {
        rows: Table::new([SKU, SIZE, QTY]),
        skipped: Vec::new(),
    };
    for (idx, row) in table.rows.iter().enumerate() {
        let cell = |column: usize| field(row, column);
        let sku = cell(columns.sku);
        let sizes: Vec<&str> = cell(columns.size).split(delimiter).collect();
        let quantities: Vec<&str> = cell(columns.qty).split(delimiter).collect();
        if sizes.len() != quantities.len() {
            let skipped = SkippedRow {
                role,
                row: idx + 1,
                sku: sku.to_string(),
                sizes: cell(columns.size).to_string(),
                quantities: cell(columns.qty).to_string(),
            };
            match policy {
                MalformedRowPolicy::Fail => {
                    return Err(ReconcileError::MalformedRow {
                        role: skipped.role,
                        row: skipped.row,
                        sku: skipped.sku,
                        sizes: skipped.sizes,
                        quantities: skipped.quantities,
                    });
                }
                MalformedRowPolicy::Skip => {
                    warn!(
                        role = %role,
                        row = skipped.row,
                        sku = %skipped.sku,
                        size_count = sizes.len(),
                        qty_count = quantities.len(),
                        "skipping row with misaligned sizes and quantities"
                    );
                    expansion.skipped.push(skipped);
                    continue;
                }
            }
        }
        for (size, qty) in sizes.into_iter().zip(quantities) {
            expansion
                .rows
                .rows
                .push(vec![sku.to_string(), size.to_string(), qty.to_string()]);
        }
    }
    Ok(expansion)
}
