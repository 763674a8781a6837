//! Resize notifications.
//!
//! [`ResizeEvents`] is the hub the terminal event pump publishes viewport sizes
//! to. A view subscribes once when it is mounted and keeps the returned
//! [`ResizeSubscription`] for as long as it lives; dropping the subscription
//! removes the listener from the hub.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A viewport size reading, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<(u16, u16)> for Viewport {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, UnboundedSender<Viewport>>,
}

/// Fan-out point for viewport size changes.
#[derive(Debug, Clone, Default)]
pub struct ResizeEvents {
    registry: Arc<Mutex<Registry>>,
}

impl ResizeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the returned guard is dropped.
    pub fn subscribe(&self) -> ResizeSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, tx);
        tracing::debug!(id, listeners = registry.listeners.len(), "resize listener added");

        ResizeSubscription {
            id,
            rx,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Deliver a reading to every live listener, in subscription order.
    pub fn publish(&self, viewport: impl Into<Viewport>) {
        let viewport = viewport.into();
        let registry = lock(&self.registry);
        tracing::trace!(
            width = viewport.width,
            height = viewport.height,
            listeners = registry.listeners.len(),
            "publishing resize"
        );
        for tx in registry.listeners.values() {
            // The receiver lives inside the guard that unregisters it, so a
            // closed channel only shows up mid-drop and is safe to skip.
            let _ = tx.send(viewport);
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

/// A registered resize listener. Unregisters itself on drop.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    rx: UnboundedReceiver<Viewport>,
    registry: Arc<Mutex<Registry>>,
}

impl ResizeSubscription {
    /// Take the oldest undelivered reading, if any.
    pub fn try_next(&mut self) -> Option<Viewport> {
        self.rx.try_recv().ok()
    }

    /// Take every undelivered reading, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = Viewport> + '_ {
        std::iter::from_fn(move || self.try_next())
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let mut registry = lock(&self.registry);
        registry.listeners.remove(&self.id);
        tracing::debug!(
            id = self.id,
            listeners = registry.listeners.len(),
            "resize listener removed"
        );
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_drop_tracks_listener_count() {
        let events = ResizeEvents::new();
        assert_eq!(events.listener_count(), 0);

        let first = events.subscribe();
        let second = events.subscribe();
        assert_eq!(events.listener_count(), 2);

        drop(first);
        assert_eq!(events.listener_count(), 1);
        drop(second);
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_readings_arrive_in_publish_order() {
        let events = ResizeEvents::new();
        let mut sub = events.subscribe();

        events.publish((80, 24));
        events.publish((100, 30));
        events.publish(Viewport::new(120, 40));

        let heights: Vec<u16> = sub.drain().map(|v| v.height).collect();
        assert_eq!(heights, vec![24, 30, 40]);
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn test_every_listener_gets_every_reading() {
        let events = ResizeEvents::new();
        let mut a = events.subscribe();
        let mut b = events.subscribe();

        events.publish((10, 5));

        assert_eq!(a.try_next(), Some(Viewport::new(10, 5)));
        assert_eq!(b.try_next(), Some(Viewport::new(10, 5)));
    }

    #[test]
    fn test_readings_before_subscribing_are_not_replayed() {
        let events = ResizeEvents::new();
        events.publish((10, 5));

        let mut late = events.subscribe();
        assert_eq!(late.try_next(), None);
    }

    #[test]
    fn test_publish_without_listeners_is_a_no_op() {
        let events = ResizeEvents::new();
        events.publish((1, 1));
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_cloned_hub_shares_listeners() {
        let events = ResizeEvents::new();
        let pump = events.clone();
        let mut sub = events.subscribe();

        pump.publish((50, 12));
        assert_eq!(pump.listener_count(), 1);
        assert_eq!(sub.try_next().map(|v| v.height), Some(12));
    }
}
