//! `stockroom-store` — the in-memory domain store.
//!
//! One [`DomainStore`] holds every company, user, role, product, movement and
//! price for the lifetime of the process. It is an ordinary value: build it in
//! `main`, hand `&mut` access to the layer that drives the UI.

pub mod clock;
pub mod collection;
pub mod events;
pub mod snapshot;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::Collection;
pub use events::StoreEvent;
pub use snapshot::StoreSnapshot;
pub use store::DomainStore;
