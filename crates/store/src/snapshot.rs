//! Owned, serializable copy of the store's state.

use serde::Serialize;

use stockroom_auth::{Role, User};
use stockroom_companies::Company;
use stockroom_core::UserId;
use stockroom_inventory::Movement;
use stockroom_products::{Price, Product};

/// Everything the store holds, at one point in time.
///
/// Snapshots are detached: later mutations of the store do not show up in an
/// existing snapshot. Passwords are never serialized (see [`User`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSnapshot {
    pub companies: Vec<Company>,
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub products: Vec<Product>,
    pub movements: Vec<Movement>,
    pub prices: Vec<Price>,
    pub authenticated_user: Option<UserId>,
}

impl StoreSnapshot {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
