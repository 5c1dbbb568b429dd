//! Value objects: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::iter::Sum;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// - **Value Object**: no identity (`Money(10.00) == Money(10.00)`)
/// - **Entity**: has identity (two products named "Widget" are still distinct)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A monetary amount (base cost, sale price).
///
/// Currency is implicit: the whole store works in one currency.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wrap an amount without range checks.
    ///
    /// The store accepts whatever callers pass; range checks belong to the
    /// checked constructors below.
    pub fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Amount that must be `> 0` (base cost, sale price).
    pub fn positive(amount: Decimal) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_amount(format!(
                "{amount} must be greater than zero"
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A stock quantity (units moved, units on hand).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    pub const ZERO: Quantity = Quantity(Decimal::ZERO);

    /// Wrap a quantity without range checks.
    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Quantity that must be `> 0` (an inbound movement).
    pub fn positive(value: Decimal) -> DomainResult<Self> {
        if value <= Decimal::ZERO {
            return Err(DomainError::invalid_amount(format!(
                "{value} must be greater than zero"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// `None` when the total does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Clamps at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl ValueObject for Quantity {}

/// Saturating: a sum never panics, it clamps at the `Decimal` range.
impl Sum for Quantity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Quantity::ZERO, Quantity::saturating_add)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0.normalize(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_positive_rejects_zero_and_negative() {
        assert!(Money::positive(dec!(0)).is_err());
        assert!(Money::positive(dec!(15.50)).is_ok());
        match Money::positive(dec!(-0.01)).unwrap_err() {
            DomainError::InvalidAmount(_) => {}
            _ => panic!("Expected InvalidAmount error"),
        }
    }

    #[test]
    fn money_displays_two_decimals() {
        assert_eq!(Money::from_decimal(dec!(10)).to_string(), "10.00");
        assert_eq!(Money::from_decimal(dec!(15.5)).to_string(), "15.50");
    }

    #[test]
    fn quantities_sum() {
        let total: Quantity = [dec!(1.5), dec!(2), dec!(0.25)]
            .into_iter()
            .map(Quantity::from_decimal)
            .sum();
        assert_eq!(total.value(), dec!(3.75));
        assert_eq!(total.to_string(), "3.75");
    }

    #[test]
    fn empty_quantity_sum_is_zero() {
        let total: Quantity = core::iter::empty().sum();
        assert_eq!(total, Quantity::ZERO);
    }

    #[test]
    fn quantity_checked_add_reports_overflow() {
        let max = Quantity::from_decimal(Decimal::MAX);
        let one = Quantity::from_decimal(dec!(1));
        assert_eq!(max.checked_add(one), None);
        assert_eq!(one.checked_add(one).map(|q| q.value()), Some(dec!(2)));
    }

    #[test]
    fn quantity_sum_clamps_instead_of_panicking() {
        let total: Quantity = [Decimal::MAX, dec!(1), Decimal::MAX]
            .into_iter()
            .map(Quantity::from_decimal)
            .sum();
        assert_eq!(total.value(), Decimal::MAX);
    }

    #[test]
    fn quantity_positive_rejects_negative() {
        assert!(Quantity::positive(dec!(-3)).is_err());
    }
}
