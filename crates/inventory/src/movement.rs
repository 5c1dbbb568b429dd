use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, MovementId, ProductId, Quantity};

/// Direction of a stock movement.
///
/// Only inbound stock is recorded today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementKind {
    Inbound,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Inbound => "INBOUND",
        }
    }
}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded stock adjustment for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    id: MovementId,
    product_id: ProductId,
    kind: MovementKind,
    quantity: Quantity,
    recorded_at: DateTime<Utc>,
}

impl Movement {
    /// An inbound movement stamped with `recorded_at`.
    pub fn inbound(
        id: MovementId,
        product_id: ProductId,
        quantity: Quantity,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            kind: MovementKind::Inbound,
            quantity,
            recorded_at,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

impl Entity for Movement {
    type Id = MovementId;

    fn id(&self) -> MovementId {
        self.id
    }
}

/// Units on hand for `product_id`, summed over its movements.
///
/// The total clamps at `Decimal::MAX` rather than overflowing.
pub fn stock_on_hand<'a, I>(movements: I, product_id: ProductId) -> Quantity
where
    I: IntoIterator<Item = &'a Movement>,
{
    movements
        .into_iter()
        .filter(|m| m.product_id == product_id)
        .map(|m| match m.kind {
            MovementKind::Inbound => m.quantity,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn movement(id: u64, product: u64, qty: rust_decimal::Decimal) -> Movement {
        Movement::inbound(
            MovementId::new(id),
            ProductId::new(product),
            Quantity::from_decimal(qty),
            Utc::now(),
        )
    }

    #[test]
    fn kind_serializes_as_uppercase_label() {
        let json = serde_json::to_value(movement(1, 1, dec!(2))).unwrap();
        assert_eq!(json["kind"], "INBOUND");
    }

    #[test]
    fn stock_sums_only_matching_product() {
        let movements = vec![
            movement(1, 1, dec!(2.5)),
            movement(2, 2, dec!(100)),
            movement(3, 1, dec!(1.25)),
        ];
        assert_eq!(stock_on_hand(&movements, ProductId::new(1)).value(), dec!(3.75));
        assert_eq!(stock_on_hand(&movements, ProductId::new(3)), Quantity::ZERO);
    }

    #[test]
    fn stock_clamps_when_movements_exceed_decimal_range() {
        let movements = vec![
            movement(1, 1, rust_decimal::Decimal::MAX),
            movement(2, 1, dec!(1)),
        ];
        assert_eq!(
            stock_on_hand(&movements, ProductId::new(1)).value(),
            rust_decimal::Decimal::MAX
        );
    }
}
