use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, Money, PriceId, ProductId};

/// A sale price for a product, effective from `effective_date` onwards.
///
/// The date is whatever the caller supplied; it may lie in the past.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    id: PriceId,
    product_id: ProductId,
    sale_price: Money,
    effective_date: NaiveDate,
}

impl Price {
    pub fn new(
        id: PriceId,
        product_id: ProductId,
        sale_price: Money,
        effective_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            product_id,
            sale_price,
            effective_date,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn sale_price(&self) -> Money {
        self.sale_price
    }

    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    pub fn is_effective_on(&self, day: NaiveDate) -> bool {
        self.effective_date <= day
    }
}

impl Entity for Price {
    type Id = PriceId;

    fn id(&self) -> PriceId {
        self.id
    }
}

/// The price in force on `day` among `prices` (assumed to be in creation order).
///
/// Picks the latest `effective_date` not after `day`; when several prices share
/// that date, the one created last wins.
pub fn latest_effective<'a, I>(prices: I, day: NaiveDate) -> Option<&'a Price>
where
    I: IntoIterator<Item = &'a Price>,
{
    prices
        .into_iter()
        .filter(|p| p.is_effective_on(day))
        // max_by_key keeps the last maximum, so later records win ties.
        .max_by_key(|p| p.effective_date)
}
