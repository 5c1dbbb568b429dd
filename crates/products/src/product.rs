use serde::{Deserialize, Serialize};

use stockroom_core::{CompanyId, Entity, Money, ProductId};

/// A product offered by a company.
///
/// `company_id` is not checked against the company collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    company_id: CompanyId,
    base_cost: Money,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        company_id: CompanyId,
        base_cost: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            company_id,
            base_cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    pub fn base_cost(&self) -> Money {
        self.base_cost
    }

    pub fn belongs_to(&self, company_id: CompanyId) -> bool {
        self.company_id == company_id
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn belongs_to_compares_company_reference() {
        let p = Product::new(
            ProductId::new(1),
            "Widget",
            CompanyId::new(3),
            Money::from_decimal(dec!(10.00)),
        );
        assert!(p.belongs_to(CompanyId::new(3)));
        assert!(!p.belongs_to(CompanyId::new(1)));
        assert_eq!(p.base_cost().to_string(), "10.00");
    }
}
