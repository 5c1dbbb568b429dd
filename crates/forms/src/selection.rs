//! Picker defaults and checks.
//!
//! The screens offer companies, roles and products through pickers. A picker
//! starts on the first entry, and a picked value is always one of the offered
//! entries; these helpers reproduce both behaviors for callers that accept ids
//! as text.

use stockroom_core::{CompanyId, Entity, ProductId, RoleId};
use stockroom_store::{Clock, DomainStore};

use crate::error::FormError;

/// First company in creation order, preselected by company pickers.
pub fn default_company<C: Clock>(store: &DomainStore<C>) -> Option<CompanyId> {
    store.companies().first().map(|c| c.id())
}

/// First predefined role, preselected by the role picker.
pub fn default_role<C: Clock>(store: &DomainStore<C>) -> Option<RoleId> {
    store.roles().first().map(|r| r.id())
}

pub(crate) fn offered_company<C: Clock>(
    store: &DomainStore<C>,
    id: CompanyId,
) -> Result<CompanyId, FormError> {
    store
        .company(id)
        .map(|c| c.id())
        .ok_or(FormError::UnknownSelection { field: "company" })
}

pub(crate) fn offered_role<C: Clock>(
    store: &DomainStore<C>,
    id: RoleId,
) -> Result<RoleId, FormError> {
    store
        .role(id)
        .map(|r| r.id())
        .ok_or(FormError::UnknownSelection { field: "role" })
}

/// The product picker lists only the selected company's products, and the
/// screens refuse to submit while that list is empty.
pub(crate) fn offered_product<C: Clock>(
    store: &DomainStore<C>,
    company_id: CompanyId,
    product_id: ProductId,
) -> Result<ProductId, FormError> {
    let mut offered = store.products_for_company(company_id).peekable();
    if offered.peek().is_none() {
        return Err(FormError::NoProductsForCompany);
    }
    offered
        .find(|p| p.id() == product_id)
        .map(|p| p.id())
        .ok_or(FormError::UnknownSelection { field: "product" })
}
