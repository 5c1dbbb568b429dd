//! `stockroom-auth` — users, the fixed role catalog, and credential matching.
//!
//! This crate is intentionally decoupled from storage: it defines what a user
//! and a role are, and how a login attempt is compared against a user.

pub mod credentials;
pub mod roles;
pub mod user;

pub use credentials::Credentials;
pub use roles::{Role, RoleCatalog};
pub use user::User;
