//! Event publishing/subscription abstraction (mechanics only).
//!
//! A bus fans every published message out to all live subscriptions. It makes
//! no persistence promises: the store's collections are the source of truth,
//! and a subscriber that misses a message can always re-read them.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// A subscription to an event stream.
///
/// Each subscription gets a copy of every message published after it was
/// created (broadcast semantics), in publication order.
///
/// ```ignore
/// let subscription = store.subscribe();
/// store.create_company("Acme", "RUC1");
///
/// while let Ok(event) = subscription.try_recv() {
///     refresh_view(&event);
/// }
/// ```
///
/// Subscriptions are meant for a single consumer. Dropping one unsubscribes it;
/// the bus prunes it on the next publish.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Collect every message already delivered, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish()` can fail (e.g. internal lock poisoning). Callers that must not
/// fail on delivery problems, like the store's mutators, log the error and
/// move on.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
