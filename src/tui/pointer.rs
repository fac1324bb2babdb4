//! Screen-level pointer dispatch
//!
//! Components that need to react to clicks anywhere on screen (not just
//! inside their own area) subscribe here. The returned [`Subscription`]
//! is the only handle to the listener: dropping it removes the listener,
//! so a component's listener lives exactly as long as its subscription.

use std::sync::{Arc, Mutex, Weak};

/// A left-button press at a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub column: u16,
    pub row: u16,
}

type Handler = Box<dyn FnMut(PointerDown) + Send>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Fan-out of pointer-down events to every live subscriber
#[derive(Clone, Default)]
pub struct PointerBus {
    listeners: Arc<Mutex<Listeners>>,
}

impl PointerBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it stays registered until the subscription drops
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(PointerDown) + Send + 'static,
    {
        let id = match self.listeners.lock() {
            Ok(mut listeners) => {
                let id = listeners.next_id;
                listeners.next_id += 1;
                listeners.handlers.push((id, Box::new(handler)));
                id
            }
            // Poisoned bus: hand back a subscription that removes nothing
            Err(_) => u64::MAX,
        };

        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Deliver an event to every subscriber, in subscription order
    pub fn dispatch(&self, event: PointerDown) {
        let Ok(mut listeners) = self.listeners.lock() else {
            return;
        };
        for (_, handler) in listeners.handlers.iter_mut() {
            handler(event);
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .map(|l| l.handlers.len())
            .unwrap_or(0)
    }
}

/// Guard for one registered handler
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Bus already gone: nothing left to unregister from
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let Ok(mut guard) = listeners.lock() else {
            return;
        };
        guard.handlers.retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn at(column: u16, row: u16) -> PointerDown {
        PointerDown { column, row }
    }

    #[test]
    fn test_dispatch_reaches_subscribers() {
        let bus = PointerBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        let _sub = bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        bus.dispatch(at(1, 1));
        bus.dispatch(at(2, 2));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = PointerBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        let sub = bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(bus.listener_count(), 1);

        drop(sub);
        assert_eq!(bus.listener_count(), 0);

        bus.dispatch(at(0, 0));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_only_removes_own_handler() {
        let bus = PointerBus::new();
        let first = bus.subscribe(|_| {});
        let _second = bus.subscribe(|_| {});
        drop(first);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn test_subscription_outlives_bus() {
        let bus = PointerBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        drop(sub);
    }
}
