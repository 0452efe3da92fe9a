//! In-process pub/sub hub for real-time shop events.
//!
//! Wraps a single broadcast channel: every connected dashboard sees every
//! event, so there is no topic keying. Publishing never blocks and never
//! fails; if nobody is listening the event is dropped.
//!
//! # Usage
//!
//! Producers (domain actions):
//!   hub.publish(ShopEvent::SystemReset { message: "...".into() });
//!
//! Consumers (SSE endpoint):
//!   let rx = hub.subscribe();

use tokio::sync::broadcast;

use crate::domains::presence::events::ShopEvent;

/// In-process broadcast hub for shop events.
///
/// Thread-safe, cloneable. Clones share the same underlying channel.
#[derive(Clone)]
pub struct EventHub {
    tx: broadcast::Sender<ShopEvent>,
}

impl EventHub {
    /// Create a new EventHub with default capacity (256 buffered events).
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a new EventHub with the given channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event to every connected observer. No-op if none.
    pub fn publish(&self, event: ShopEvent) {
        // Ignore send errors (no active receivers)
        let _ = self.tx.send(event);
    }

    /// Subscribe to the live event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<ShopEvent> {
        self.tx.subscribe()
    }

    /// Number of currently connected observers.
    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}
