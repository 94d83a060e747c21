pub mod error;
pub mod inputs;
pub mod options;
pub mod report;
pub mod roles;
pub mod table;

pub use error::{ReconcileError, Result};
pub use inputs::ReconcileInputs;
pub use options::{MalformedRowPolicy, ReconcileOptions, ValueComparison};
pub use report::{ReconcileReport, SkippedRow};
pub use roles::{InputRole, OutputRole};
pub use table::{Table, field};

/// Column holding the stock-keeping unit in every input table.
pub const SKU: &str = "SKU";
/// Column holding the delimited size list.
pub const SIZE: &str = "Size";
/// Column holding the delimited quantity list.
pub const QTY: &str = "Qty";
/// Column holding the per-unit cost.
pub const UNIT_COST: &str = "Unit Cost";

/// Suffix marking values taken from the storefront export in joined reports.
pub const STOREFRONT_SUFFIX: &str = "_shopify";
/// Suffix marking values taken from the supplier feed in joined reports.
pub const SUPPLIER_SUFFIX: &str = "_supplier";
