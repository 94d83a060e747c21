//! Logical names for the tables read and written by a reconciliation run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputRole {
    /// Cleaned supplier feed (`all_data`).
    SupplierCatalog,
    /// SKUs already tracked as of the previous run (`all_skus`).
    KnownSkuSet,
    /// Storefront platform export (`shopify_data`).
    StorefrontCatalog,
    /// SKUs to admit this run (`to_add`).
    OnboardingQueue,
}

impl InputRole {
    pub const ALL: [InputRole; 4] = [
        InputRole::SupplierCatalog,
        InputRole::KnownSkuSet,
        InputRole::StorefrontCatalog,
        InputRole::OnboardingQueue,
    ];

    /// Fixed file name inside the input folder.
    ///
    /// The supplier catalog has no fixed name; its file is chosen per run.
    pub fn default_file_name(self) -> Option<&'static str> {
        match self {
            InputRole::SupplierCatalog => None,
            InputRole::KnownSkuSet => Some("all_skus.csv"),
            InputRole::StorefrontCatalog => Some("shopify_data.csv"),
            InputRole::OnboardingQueue => Some("to_add.csv"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputRole::SupplierCatalog => "supplier catalog",
            InputRole::KnownSkuSet => "known SKU set",
            InputRole::StorefrontCatalog => "storefront catalog",
            InputRole::OnboardingQueue => "onboarding queue",
        }
    }
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the six output tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputRole {
    NewProductsOneSize,
    NewProductsMultiSize,
    KnownSkus,
    ZeroInventory,
    QtyMismatches,
    CostMismatches,
}

impl OutputRole {
    pub const ALL: [OutputRole; 6] = [
        OutputRole::NewProductsOneSize,
        OutputRole::NewProductsMultiSize,
        OutputRole::KnownSkus,
        OutputRole::ZeroInventory,
        OutputRole::QtyMismatches,
        OutputRole::CostMismatches,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            OutputRole::NewProductsOneSize => "os_add_products.csv",
            OutputRole::NewProductsMultiSize => "others_add_products.csv",
            OutputRole::KnownSkus => "all_skus.csv",
            OutputRole::ZeroInventory => "zero_inventory_shopify.csv",
            OutputRole::QtyMismatches => "os_update_products.csv",
            OutputRole::CostMismatches => "different_costs.csv",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputRole::NewProductsOneSize => "New one-size products to onboard",
            OutputRole::NewProductsMultiSize => "New multi-size products to onboard",
            OutputRole::KnownSkus => "Updated known SKU set (replaces input)",
            OutputRole::ZeroInventory => "Known SKUs absent from the supplier feed",
            OutputRole::QtyMismatches => "Per-size quantity mismatches",
            OutputRole::CostMismatches => "Unit cost mismatches",
        }
    }
}

impl fmt::Display for OutputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
