//! Change notifications published by the store.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_auth::User;
use stockroom_companies::Company;
use stockroom_core::UserId;
use stockroom_events::Event;
use stockroom_inventory::Movement;
use stockroom_products::{Price, Product};

/// One applied change to the store.
///
/// Published after the change is visible through the store's read views, so a
/// subscriber reacting to an event always sees the new state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    CompanyCreated {
        company: Company,
        occurred_at: DateTime<Utc>,
    },
    UserCreated {
        user: User,
        occurred_at: DateTime<Utc>,
    },
    ProductCreated {
        product: Product,
        occurred_at: DateTime<Utc>,
    },
    MovementRecorded {
        movement: Movement,
        occurred_at: DateTime<Utc>,
    },
    PriceCreated {
        price: Price,
        occurred_at: DateTime<Utc>,
    },
    /// The authenticated user changed (login, forced switch, or logout).
    SessionChanged {
        user_id: Option<UserId>,
        occurred_at: DateTime<Utc>,
    },
}

impl Event for StoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::CompanyCreated { .. } => "companies.company.created",
            StoreEvent::UserCreated { .. } => "auth.user.created",
            StoreEvent::ProductCreated { .. } => "products.product.created",
            StoreEvent::MovementRecorded { .. } => "inventory.movement.recorded",
            StoreEvent::PriceCreated { .. } => "products.price.created",
            StoreEvent::SessionChanged { .. } => "auth.session.changed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StoreEvent::CompanyCreated { occurred_at, .. }
            | StoreEvent::UserCreated { occurred_at, .. }
            | StoreEvent::ProductCreated { occurred_at, .. }
            | StoreEvent::MovementRecorded { occurred_at, .. }
            | StoreEvent::PriceCreated { occurred_at, .. }
            | StoreEvent::SessionChanged { occurred_at, .. } => *occurred_at,
        }
    }
}
