//! Configuration options for a reconciliation run.

use serde::{Deserialize, Serialize};

/// What to do with a catalog row whose size and quantity lists differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRowPolicy {
    /// Abort the run.
    #[default]
    Fail,
    /// Leave the row out of the per-size expansion and report it.
    Skip,
}

/// How quantity and cost values from the two sources are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueComparison {
    /// Values match only when the captured strings are identical.
    #[default]
    Exact,
    /// Values that both parse as numbers match when numerically equal;
    /// anything else falls back to exact comparison.
    Numeric,
}

/// Options controlling reconciliation behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOptions {
    /// Size value marking a product without size variants.
    pub one_size_sentinel: String,
    /// Separator of the supplier feed's size/quantity lists.
    pub supplier_delimiter: char,
    /// Separator of the storefront export's size/quantity lists.
    pub storefront_delimiter: char,
    pub malformed_rows: MalformedRowPolicy,
    pub value_comparison: ValueComparison,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            one_size_sentinel: "OS".to_string(),
            supplier_delimiter: ',',
            storefront_delimiter: ';',
            malformed_rows: MalformedRowPolicy::default(),
            value_comparison: ValueComparison::default(),
        }
    }
}

impl ReconcileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }

    #[must_use]
    pub fn with_value_comparison(mut self, comparison: ValueComparison) -> Self {
        self.value_comparison = comparison;
        self
    }

    #[must_use]
    pub fn with_one_size_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.one_size_sentinel = sentinel.into();
        self
    }
}
