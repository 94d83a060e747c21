//! The individual derivations of a reconciliation run.

use std::collections::HashSet;

use invrec_model::{
    InputRole, QTY, ReconcileOptions, Result, SIZE, SKU, STOREFRONT_SUFFIX, SUPPLIER_SUFFIX,
    SkippedRow, Table, UNIT_COST, ValueComparison, field,
};

use crate::columns::CatalogColumns;
use crate::compare::values_match;
use crate::expand::expand_sizes;
use crate::join::inner_join;

const SUFFIXES: (&str, &str) = (STOREFRONT_SUFFIX, SUPPLIER_SUFFIX);

/// Supplier rows selected for onboarding, split on the one-size sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProducts {
    pub one_size: Table,
    pub multi_size: Table,
}

/// Supplier rows whose SKU is queued for onboarding, deduplicated.
///
/// Queued SKUs the supplier does not carry contribute nothing.
pub fn new_products(supplier: &Table, onboarding: &Table, one_size: &str) -> Result<NewProducts> {
    let sku = supplier.require_column(InputRole::SupplierCatalog, SKU)?;
    let size = supplier.require_column(InputRole::SupplierCatalog, SIZE)?;
    let queued_sku = onboarding.require_column(InputRole::OnboardingQueue, SKU)?;
    let queued: HashSet<&str> = onboarding.value_set(queued_sku);

    let selected = supplier
        .filter_rows(|row| queued.contains(field(row, sku)))
        .dedup_rows();
    let is_one_size = |row: &[String]| field(row, size) == one_size;
    Ok(NewProducts {
        one_size: selected.filter_rows(is_one_size),
        multi_size: selected.filter_rows(|row| !is_one_size(row)),
    })
}

/// Known SKUs followed by the onboarding queue, without repeated rows.
pub fn update_known_skus(known: &Table, onboarding: &Table) -> Result<Table> {
    known.require_column(InputRole::KnownSkuSet, SKU)?;
    onboarding.require_column(InputRole::OnboardingQueue, SKU)?;
    Ok(known.concat_union(onboarding).dedup_rows())
}

/// Known SKU rows whose SKU the supplier feed no longer lists.
pub fn zero_inventory(known: &Table, supplier: &Table) -> Result<Table> {
    let known_sku = known.require_column(InputRole::KnownSkuSet, SKU)?;
    let supplier_sku = supplier.require_column(InputRole::SupplierCatalog, SKU)?;
    let carried: HashSet<&str> = supplier.value_set(supplier_sku);
    Ok(known.filter_rows(|row| !carried.contains(field(row, known_sku))))
}

/// Per-size quantity differences between storefront and supplier.
///
/// `storefront` must already carry the remapped column names. Returns the
/// mismatch table (`SKU, Size, Qty_shopify, Qty_supplier`) and any rows left
/// out of the expansion.
pub fn qty_mismatches(
    storefront: &Table,
    supplier: &Table,
    options: &ReconcileOptions,
) -> Result<(Table, Vec<SkippedRow>)> {
    let storefront_columns = CatalogColumns::resolve(storefront, InputRole::StorefrontCatalog)?;
    let supplier_columns = CatalogColumns::resolve(supplier, InputRole::SupplierCatalog)?;
    let storefront_sizes = expand_sizes(
        storefront,
        &storefront_columns,
        options.storefront_delimiter,
        InputRole::StorefrontCatalog,
        options.malformed_rows,
    )?;
    let supplier_sizes = expand_sizes(
        supplier,
        &supplier_columns,
        options.supplier_delimiter,
        InputRole::SupplierCatalog,
        options.malformed_rows,
    )?;

    let joined = inner_join(
        &storefront_sizes.rows,
        &supplier_sizes.rows,
        &[SKU, SIZE],
        SUFFIXES,
    );
    let mismatches = differing_rows(&joined, QTY, options.value_comparison);

    let mut skipped = storefront_sizes.skipped;
    skipped.extend(supplier_sizes.skipped);
    Ok((mismatches, skipped))
}

/// Unit cost differences per SKU (`SKU, Unit Cost_shopify, Unit Cost_supplier`).
pub fn cost_mismatches(
    storefront: &Table,
    supplier: &Table,
    comparison: ValueComparison,
) -> Result<Table> {
    let storefront_costs = storefront.select(&[
        storefront.require_column(InputRole::StorefrontCatalog, SKU)?,
        storefront.require_column(InputRole::StorefrontCatalog, UNIT_COST)?,
    ]);
    let supplier_costs = supplier.select(&[
        supplier.require_column(InputRole::SupplierCatalog, SKU)?,
        supplier.require_column(InputRole::SupplierCatalog, UNIT_COST)?,
    ]);
    let joined = inner_join(&storefront_costs, &supplier_costs, &[SKU], SUFFIXES);
    Ok(differing_rows(&joined, UNIT_COST, comparison))
}

/// Keep joined rows whose two suffixed `column` values do not match.
fn differing_rows(joined: &Table, column: &str, comparison: ValueComparison) -> Table {
    let left = joined.column_index(&format!("{column}{STOREFRONT_SUFFIX}"));
    let right = joined.column_index(&format!("{column}{SUPPLIER_SUFFIX}"));
    let (Some(left), Some(right)) = (left, right) else {
        return Table::new(joined.headers.clone());
    };
    joined.filter_rows(|row| !values_match(field(row, left), field(row, right), comparison))
}
