//! Inventory domain module.
//!
//! Stock changes are recorded as movements; the quantity on hand is derived
//! from them, never stored.

pub mod movement;

pub use movement::{Movement, MovementKind, stock_on_hand};
