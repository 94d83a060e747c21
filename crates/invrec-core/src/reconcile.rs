//! A full reconciliation run over loaded inputs.

use std::time::Instant;

use tracing::{debug, info, info_span};

use invrec_model::{InputRole, ReconcileInputs, ReconcileOptions, ReconcileReport, Result, SKU};

use crate::columns::{CatalogColumns, remap_storefront_columns};
use crate::derive::{
    NewProducts, cost_mismatches, new_products, qty_mismatches, update_known_skus, zero_inventory,
};

/// Run every derivation over `inputs` and collect the six output tables.
///
/// All schema checks happen before any derivation, so a structurally invalid
/// input fails the run without partial results. Nothing here touches the
/// filesystem; persisting the report (including writing the updated known
/// SKU set back over its source) is the caller's job.
pub fn reconcile(inputs: &ReconcileInputs, options: &ReconcileOptions) -> Result<ReconcileReport> {
    let span = info_span!(
        "reconcile",
        supplier_rows = inputs.supplier.len(),
        storefront_rows = inputs.storefront.len()
    );
    let _guard = span.enter();
    let start = Instant::now();

    CatalogColumns::resolve(&inputs.supplier, InputRole::SupplierCatalog)?;
    inputs.known_skus.require_column(InputRole::KnownSkuSet, SKU)?;
    inputs
        .onboarding
        .require_column(InputRole::OnboardingQueue, SKU)?;
    let storefront = remap_storefront_columns(&inputs.storefront)?;

    let NewProducts {
        one_size,
        multi_size,
    } = new_products(
        &inputs.supplier,
        &inputs.onboarding,
        &options.one_size_sentinel,
    )?;
    debug!(
        one_size = one_size.len(),
        multi_size = multi_size.len(),
        "new products selected"
    );

    let known_skus = update_known_skus(&inputs.known_skus, &inputs.onboarding)?;
    debug!(
        before = inputs.known_skus.len(),
        after = known_skus.len(),
        "known SKU set updated"
    );

    let zero_inventory = zero_inventory(&inputs.known_skus, &inputs.supplier)?;
    debug!(rows = zero_inventory.len(), "zero inventory detected");

    let (qty_mismatches, skipped_rows) = qty_mismatches(&storefront, &inputs.supplier, options)?;
    debug!(
        rows = qty_mismatches.len(),
        skipped = skipped_rows.len(),
        "quantity mismatches detected"
    );

    let cost_mismatches = cost_mismatches(&storefront, &inputs.supplier, options.value_comparison)?;
    debug!(rows = cost_mismatches.len(), "cost mismatches detected");

    info!(
        new_products = one_size.len() + multi_size.len(),
        zero_inventory = zero_inventory.len(),
        qty_mismatches = qty_mismatches.len(),
        cost_mismatches = cost_mismatches.len(),
        skipped_rows = skipped_rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "reconciliation complete"
    );

    Ok(ReconcileReport {
        new_products_one_size: one_size,
        new_products_multi_size: multi_size,
        known_skus,
        zero_inventory,
        qty_mismatches,
        cost_mismatches,
        skipped_rows,
    })
}
