//! Products domain module.
//!
//! This crate contains the catalog entities: products and the dated sale
//! prices attached to them. Pure data, no IO.

pub mod price;
pub mod product;

pub use price::{Price, latest_effective};
pub use product::Product;
