use chrono::NaiveDate;
use tracing::debug;

use stockroom_core::{CompanyId, Money, ProductId};
use stockroom_products::Price;
use stockroom_store::{Clock, DomainStore};

use crate::error::{FormError, Submitted};
use crate::input::{parse_date, parse_decimal};
use crate::selection::{default_company, offered_product};

/// The "new price" screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceForm {
    pub company_id: Option<CompanyId>,
    pub product_id: Option<ProductId>,
    pub sale_price: String,
    /// `YYYY-MM-DD`.
    pub effective_date: String,
}

/// A price form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPrice {
    pub product_id: ProductId,
    pub sale_price: Money,
    pub effective_date: NaiveDate,
}

impl PriceForm {
    /// First company preselected, effective date set to today.
    pub fn with_defaults<C: Clock>(store: &DomainStore<C>) -> Self {
        Self {
            company_id: default_company(store),
            effective_date: store.clock().today().format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn select_company(&mut self, company_id: CompanyId) {
        self.company_id = Some(company_id);
        self.product_id = None;
    }

    pub fn validate<C: Clock>(&self, store: &DomainStore<C>) -> Result<ValidPrice, FormError> {
        let (Some(company_id), Some(product_id)) = (self.company_id, self.product_id) else {
            return Err(FormError::MissingFields);
        };
        if self.sale_price.is_empty() {
            return Err(FormError::MissingFields);
        }

        let sale_price = parse_decimal(&self.sale_price, "sale price").and_then(|d| {
            Money::positive(d).map_err(|_| FormError::InvalidAmount { field: "sale price" })
        })?;

        let effective_date = parse_date(&self.effective_date)?;
        if effective_date < store.clock().today() {
            return Err(FormError::DateInPast);
        }

        Ok(ValidPrice {
            product_id: offered_product(store, company_id, product_id)?,
            sale_price,
            effective_date,
        })
    }

    pub fn submit<C: Clock>(&self, store: &mut DomainStore<C>) -> Result<Submitted<Price>, FormError> {
        let valid = self
            .validate(store)
            .inspect_err(|e| debug!(error = %e, "price form rejected"))?;
        let price = store.create_price(valid.product_id, valid.sale_price, valid.effective_date);
        Ok(Submitted::clean(price))
    }
}
