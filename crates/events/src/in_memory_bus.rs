//! In-memory event bus.

use std::sync::{Mutex, mpsc};

use crate::bus::{EventBus, Subscription};

#[derive(Debug)]
pub enum InMemoryBusError {
    /// Publish failed due to internal lock poisoning.
    Poisoned,
}

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Best-effort fan-out
/// - Dead subscribers are dropped while publishing
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| InMemoryBusError::Poisoned)?;

        subs.retain(|tx| tx.send(message.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a subscription; it just never receives.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_receives_every_message() {
        let bus = InMemoryEventBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.publish(1u32).unwrap();
        bus.publish(2u32).unwrap();

        assert_eq!(a.drain(), vec![1, 2]);
        assert_eq!(b.drain(), vec![1, 2]);
    }

    #[test]
    fn late_subscriber_misses_earlier_messages() {
        let bus = InMemoryEventBus::new();
        bus.publish("early").unwrap();
        let sub = bus.subscribe();
        bus.publish("late").unwrap();

        assert_eq!(sub.drain(), vec!["late"]);
    }

    #[test]
    fn dropped_subscriber_does_not_block_the_rest() {
        let bus = InMemoryEventBus::new();
        let keep = bus.subscribe();
        let dropped = bus.subscribe();

        drop(dropped);
        bus.publish(()).unwrap();
        bus.publish(()).unwrap();

        assert_eq!(keep.drain().len(), 2);
    }

    #[test]
    fn publish_without_subscribers_is_ok() {
        let bus: InMemoryEventBus<u8> = InMemoryEventBus::new();
        assert!(bus.publish(9).is_ok());
    }
}
