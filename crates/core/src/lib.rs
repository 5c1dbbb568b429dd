//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CompanyId, IdSequence, MovementId, PriceId, ProductId, RoleId, UserId};
pub use value_object::{Money, Quantity, ValueObject};
