use crate::roles::InputRole;
use crate::table::Table;

/// The four input tables of a run, fully loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileInputs {
    pub supplier: Table,
    pub known_skus: Table,
    /// Storefront export as read; its columns are remapped positionally
    /// during reconciliation.
    pub storefront: Table,
    pub onboarding: Table,
}

impl ReconcileInputs {
    pub fn table(&self, role: InputRole) -> &Table {
        match role {
            InputRole::SupplierCatalog => &self.supplier,
            InputRole::KnownSkuSet => &self.known_skus,
            InputRole::StorefrontCatalog => &self.storefront,
            InputRole::OnboardingQueue => &self.onboarding,
        }
    }

    pub fn table_mut(&mut self, role: InputRole) -> &mut Table {
        match role {
            InputRole::SupplierCatalog => &mut self.supplier,
            InputRole::KnownSkuSet => &mut self.known_skus,
            InputRole::StorefrontCatalog => &mut self.storefront,
            InputRole::OnboardingQueue => &mut self.onboarding,
        }
    }
}
