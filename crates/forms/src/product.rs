use tracing::debug;

use stockroom_core::{CompanyId, Money};
use stockroom_products::Product;
use stockroom_store::{Clock, DomainStore};

use crate::error::{FormError, Submitted};
use crate::input::parse_decimal;
use crate::selection::{default_company, offered_company};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

/// The "new product" screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub company_id: Option<CompanyId>,
    /// Raw text of the cost field (see [`crate::sanitize_decimal_input`]).
    pub base_cost: String,
}

/// A product form that passed validation; `name` is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    pub name: String,
    pub company_id: CompanyId,
    pub base_cost: Money,
}

impl ProductForm {
    pub fn with_defaults<C: Clock>(store: &DomainStore<C>) -> Self {
        Self {
            company_id: default_company(store),
            ..Self::default()
        }
    }

    pub fn validate<C: Clock>(&self, store: &DomainStore<C>) -> Result<ValidProduct, FormError> {
        let Some(company_id) = self.company_id else {
            return Err(FormError::MissingFields);
        };
        if self.name.is_empty() || self.base_cost.is_empty() {
            return Err(FormError::MissingFields);
        }

        let base_cost = parse_decimal(&self.base_cost, "base cost")
            .and_then(|d| Money::positive(d).map_err(|_| FormError::InvalidAmount { field: "base cost" }))?;

        let name = self.name.trim();
        let chars = name.chars().count();
        if chars < NAME_MIN_CHARS {
            return Err(FormError::NameTooShort { min: NAME_MIN_CHARS });
        }
        if chars > NAME_MAX_CHARS {
            return Err(FormError::NameTooLong { max: NAME_MAX_CHARS });
        }

        Ok(ValidProduct {
            name: name.to_string(),
            company_id: offered_company(store, company_id)?,
            base_cost,
        })
    }

    pub fn submit<C: Clock>(&self, store: &mut DomainStore<C>) -> Result<Submitted<Product>, FormError> {
        let valid = self
            .validate(store)
            .inspect_err(|e| debug!(error = %e, "product form rejected"))?;
        let product = store.create_product(valid.name, valid.company_id, valid.base_cost);
        Ok(Submitted::clean(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn store_and_form() -> (DomainStore, ProductForm) {
        let mut store = DomainStore::new();
        store.create_company("Acme", "RUC1");
        let form = ProductForm {
            name: "  Widget  ".into(),
            base_cost: "10.00".into(),
            ..ProductForm::with_defaults(&store)
        };
        (store, form)
    }

    #[test]
    fn name_is_trimmed_on_submit() {
        let (mut store, form) = store_and_form();
        let product = form.submit(&mut store).unwrap().entity;
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.base_cost().amount(), dec!(10.00));
    }

    #[test]
    fn zero_cost_rejected() {
        let (store, form) = store_and_form();
        let form = ProductForm {
            base_cost: "0".into(),
            ..form
        };
        assert_eq!(
            form.validate(&store),
            Err(FormError::InvalidAmount { field: "base cost" })
        );
    }

    #[test]
    fn unparsable_cost_rejected() {
        let (store, form) = store_and_form();
        let form = ProductForm {
            base_cost: "1.2.3".into(),
            ..form
        };
        assert!(matches!(form.validate(&store), Err(FormError::InvalidAmount { .. })));
    }

    #[test]
    fn short_name_rejected_after_trim() {
        let (store, form) = store_and_form();
        let form = ProductForm {
            name: " a ".into(),
            ..form
        };
        assert_eq!(form.validate(&store), Err(FormError::NameTooShort { min: 2 }));
    }

    #[test]
    fn long_name_rejected() {
        let (store, form) = store_and_form();
        let form = ProductForm {
            name: "x".repeat(51),
            ..form
        };
        assert_eq!(form.validate(&store), Err(FormError::NameTooLong { max: 50 }));
    }

    #[test]
    fn unknown_company_rejected() {
        let (store, form) = store_and_form();
        let form = ProductForm {
            company_id: Some(CompanyId::new(9)),
            ..form
        };
        assert_eq!(
            form.validate(&store),
            Err(FormError::UnknownSelection { field: "company" })
        );
    }
}
