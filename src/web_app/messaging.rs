// web_app/messaging.rs - Application-wide boat selection channel
//
// A process-wide publish/subscribe channel carrying the active boat id.
// Every mounted component that cares about the selection (detail tabs, map)
// subscribes here; the search results grid publishes. Listeners are invoked
// synchronously, in subscription order, outside the registry lock so a
// listener may subscribe or publish reentrantly.
//
// This module is plain std so it compiles for every feature combination
// and is testable without a Leptos runtime.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// The single message shape carried by the channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoatSelected {
    pub record_id: i32,
}

type Listener = Arc<dyn Fn(&BoatSelected) + Send + Sync>;

/// Handle returned by [`BoatMessageChannel::subscribe`].
///
/// Must be handed back to `unsubscribe` when the owning component is torn
/// down; a dropped handle leaves the listener registered.
#[must_use = "keep the handle and pass it to unsubscribe on teardown"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    // BTreeMap keeps listeners in subscription order for delivery.
    listeners: BTreeMap<u64, Listener>,
}

/// Application-scoped message channel for the active boat selection.
///
/// Cheap to clone; all clones share one listener registry. Late subscribers
/// only see events published after they subscribed (no replay).
#[derive(Clone, Default)]
pub struct BoatMessageChannel {
    inner: Arc<Mutex<Registry>>,
}

impl BoatMessageChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; returns the handle needed to unsubscribe.
    pub fn subscribe(
        &self,
        listener: impl Fn(&BoatSelected) + Send + Sync + 'static,
    ) -> Subscription {
        let mut registry = self.inner.lock().expect("message registry poisoned");
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Arc::new(listener));
        Subscription { id }
    }

    /// Remove a listener. Consumes the handle so a subscription cannot be
    /// released twice.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut registry = self.inner.lock().expect("message registry poisoned");
        registry.listeners.remove(&subscription.id);
    }

    /// Deliver `message` to every currently registered listener.
    ///
    /// The listener set is snapshotted before delivery: a listener added
    /// during a publish does not receive the in-flight message.
    pub fn publish(&self, message: BoatSelected) {
        let listeners: Vec<Listener> = {
            let registry = self.inner.lock().expect("message registry poisoned");
            registry.listeners.values().cloned().collect()
        };
        for listener in listeners {
            listener(&message);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .expect("message registry poisoned")
            .listeners
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let channel = BoatMessageChannel::new();
        let seen_a = Arc::new(Mutex::new(Vec::new()));
        let seen_b = Arc::new(Mutex::new(Vec::new()));

        let a = {
            let seen = seen_a.clone();
            channel.subscribe(move |m| seen.lock().unwrap().push(m.record_id))
        };
        let b = {
            let seen = seen_b.clone();
            channel.subscribe(move |m| seen.lock().unwrap().push(m.record_id))
        };

        channel.publish(BoatSelected { record_id: 42 });

        assert_eq!(*seen_a.lock().unwrap(), vec![42]);
        assert_eq!(*seen_b.lock().unwrap(), vec![42]);

        channel.unsubscribe(a);
        channel.unsubscribe(b);
    }

    #[test]
    fn test_each_publish_delivered_exactly_once() {
        let channel = BoatMessageChannel::new();
        let count = Arc::new(AtomicUsize::new(0));
        let sub = {
            let count = count.clone();
            channel.subscribe(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };

        channel.publish(BoatSelected { record_id: 1 });
        channel.publish(BoatSelected { record_id: 2 });

        assert_eq!(count.load(Ordering::SeqCst), 2);
        channel.unsubscribe(sub);
    }

    #[test]
    fn test_unsubscribed_listener_not_called() {
        let channel = BoatMessageChannel::new();
        let count = Arc::new(AtomicUsize::new(0));
        let sub = {
            let count = count.clone();
            channel.subscribe(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };

        channel.publish(BoatSelected { record_id: 1 });
        channel.unsubscribe(sub);
        channel.publish(BoatSelected { record_id: 2 });

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn test_late_subscriber_gets_no_replay() {
        let channel = BoatMessageChannel::new();
        channel.publish(BoatSelected { record_id: 1 });

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sub = {
            let seen = seen.clone();
            channel.subscribe(move |m| seen.lock().unwrap().push(m.record_id))
        };

        assert!(seen.lock().unwrap().is_empty());
        channel.publish(BoatSelected { record_id: 2 });
        assert_eq!(*seen.lock().unwrap(), vec![2]);
        channel.unsubscribe(sub);
    }

    #[test]
    fn test_delivery_in_subscription_order() {
        let channel = BoatMessageChannel::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let subs: Vec<_> = (0..5)
            .map(|i| {
                let order = order.clone();
                channel.subscribe(move |_| order.lock().unwrap().push(i))
            })
            .collect();

        channel.publish(BoatSelected { record_id: 9 });
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3, 4]);

        for sub in subs {
            channel.unsubscribe(sub);
        }
    }

    #[test]
    fn test_reentrant_subscribe_during_publish() {
        let channel = BoatMessageChannel::new();
        let inner_calls = Arc::new(AtomicUsize::new(0));

        let outer = {
            let channel = channel.clone();
            let inner_calls = inner_calls.clone();
            channel.clone().subscribe(move |_| {
                // Subscribing from inside a listener must not deadlock, and
                // the new listener must not see the in-flight message.
                let inner_calls = inner_calls.clone();
                let sub = channel.subscribe(move |_| {
                    inner_calls.fetch_add(1, Ordering::SeqCst);
                });
                // Leak intentionally into the registry for the second publish.
                std::mem::forget(sub);
            })
        };

        channel.publish(BoatSelected { record_id: 1 });
        assert_eq!(inner_calls.load(Ordering::SeqCst), 0);

        channel.publish(BoatSelected { record_id: 2 });
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);

        channel.unsubscribe(outer);
    }

    #[test]
    fn test_clones_share_one_registry() {
        let channel = BoatMessageChannel::new();
        let clone = channel.clone();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sub = {
            let seen = seen.clone();
            channel.subscribe(move |m| seen.lock().unwrap().push(m.record_id))
        };

        clone.publish(BoatSelected { record_id: 3 });
        assert_eq!(*seen.lock().unwrap(), vec![3]);
        assert_eq!(clone.listener_count(), 1);

        clone.unsubscribe(sub);
        assert_eq!(channel.listener_count(), 0);
    }
}
