//! Change events and the in-process pub/sub used to deliver them.
//!
//! The store publishes one event per mutation; views subscribe to learn that
//! their listing is stale.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
