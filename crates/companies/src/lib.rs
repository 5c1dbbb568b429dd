//! Companies domain module.
//!
//! A company is the tenant that owns products and users.

pub mod company;

pub use company::Company;
