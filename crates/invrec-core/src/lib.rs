//! Reconciliation of a supplier feed against a storefront export.
//!
//! Every derivation reads only the original inputs and produces exactly one
//! output table, so the steps are independent of each other. In particular
//! zero-inventory detection sees the known SKU set as loaded, never the
//! updated set written back at the end of the run.

pub mod columns;
pub mod compare;
pub mod derive;
pub mod expand;
pub mod join;
pub mod reconcile;

pub use columns::{CatalogColumns, remap_storefront_columns};
pub use compare::values_match;
pub use derive::{cost_mismatches, new_products, qty_mismatches, update_known_skus, zero_inventory};
pub use expand::{Expansion, expand_sizes};
pub use join::inner_join;
pub use reconcile::reconcile;
