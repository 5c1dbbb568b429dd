use tracing::debug;

use stockroom_core::{CompanyId, ProductId, Quantity};
use stockroom_inventory::Movement;
use stockroom_store::{Clock, DomainStore};

use crate::error::{FormError, Submitted};
use crate::input::parse_decimal;
use crate::selection::{default_company, offered_product};

/// The "inbound stock" screen.
///
/// The company only narrows the product picker; the movement itself records
/// just the product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementForm {
    pub company_id: Option<CompanyId>,
    pub product_id: Option<ProductId>,
    pub quantity: String,
}

impl MovementForm {
    pub fn with_defaults<C: Clock>(store: &DomainStore<C>) -> Self {
        Self {
            company_id: default_company(store),
            ..Self::default()
        }
    }

    /// Switching company resets the product pick.
    pub fn select_company(&mut self, company_id: CompanyId) {
        self.company_id = Some(company_id);
        self.product_id = None;
    }

    pub fn validate<C: Clock>(
        &self,
        store: &DomainStore<C>,
    ) -> Result<(ProductId, Quantity), FormError> {
        let (Some(company_id), Some(product_id)) = (self.company_id, self.product_id) else {
            return Err(FormError::MissingFields);
        };
        if self.quantity.is_empty() {
            return Err(FormError::MissingFields);
        }

        let quantity = parse_decimal(&self.quantity, "quantity").and_then(|d| {
            Quantity::positive(d).map_err(|_| FormError::InvalidAmount { field: "quantity" })
        })?;

        let product_id = offered_product(store, company_id, product_id)?;
        if store.stock_on_hand(product_id).checked_add(quantity).is_none() {
            return Err(FormError::QuantityTooLarge);
        }
        Ok((product_id, quantity))
    }

    pub fn submit<C: Clock>(&self, store: &mut DomainStore<C>) -> Result<Submitted<Movement>, FormError> {
        let (product_id, quantity) = self
            .validate(store)
            .inspect_err(|e| debug!(error = %e, "movement form rejected"))?;
        Ok(Submitted::clean(store.record_movement(product_id, quantity)))
    }
}
