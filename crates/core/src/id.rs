//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are plain integers assigned by the store from a per-collection
//! [`IdSequence`]. They are only unique within their own collection: a
//! `CompanyId(1)` and a `ProductId(1)` routinely coexist.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a company (tenant / business).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(u64);

/// Identifier of a user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

/// Identifier of one of the predefined roles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(u64);

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

/// Identifier of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementId(u64);

/// Identifier of a price record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceId(u64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw identifier value.
            ///
            /// Production ids come from the store's sequences; this exists for
            /// callers that receive ids from outside (console input, tests).
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_int_newtype!(CompanyId, "CompanyId");
impl_int_newtype!(UserId, "UserId");
impl_int_newtype!(RoleId, "RoleId");
impl_int_newtype!(ProductId, "ProductId");
impl_int_newtype!(MovementId, "MovementId");
impl_int_newtype!(PriceId, "PriceId");

/// Monotonic id allocator for one collection.
///
/// The first call to [`IdSequence::next`] yields 1; every later call yields the
/// previous value plus one. Deterministic, so tests can predict ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier.
    pub fn next<T: From<u64>>(&mut self) -> T {
        self.last += 1;
        T::from(self.last)
    }
}
