//! Eviction notification channel
//!
//! Subscribers register a callback and receive every capacity eviction
//! synchronously, in registration order, before the triggering insert
//! returns. Explicit removals and [`clear`](crate::cache::BoundedCache::clear)
//! do not notify; only the capacity bound does.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Event describing an entry evicted by the capacity bound
///
/// Produced exactly once per eviction and delivered by reference to every
/// registered subscriber.
#[derive(Debug, Clone)]
pub struct EvictionEvent<K, V> {
    /// The evicted key
    pub key: K,

    /// The evicted value
    pub value: V,

    /// When the eviction occurred
    pub timestamp: DateTime<Utc>,
}

impl<K, V> EvictionEvent<K, V> {
    /// Create a new eviction event
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            timestamp: Utc::now(),
        }
    }
}

/// Opaque handle identifying a registered eviction subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Boxed eviction callback
pub(crate) type EvictionCallback<K, V> = Box<dyn Fn(&EvictionEvent<K, V>) + Send + Sync>;

/// Registry of eviction subscribers, notified in registration order
///
/// Lives behind the same lock as the cache state, so registration changes
/// can never race a firing event.
pub(crate) struct SubscriberRegistry<K, V> {
    subscribers: Vec<(SubscriptionId, EvictionCallback<K, V>)>,
}

impl<K, V> SubscriberRegistry<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a callback, returning its handle
    pub(crate) fn add(&mut self, callback: EvictionCallback<K, V>) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.subscribers.push((id, callback));
        id
    }

    /// Deregister a callback; unknown handles are a no-op
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() < before
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver an event to every subscriber in registration order
    pub(crate) fn notify(&self, event: &EvictionEvent<K, V>) {
        for (_, callback) in &self.subscribers {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_notify_delivers_in_registration_order() {
        let mut registry: SubscriberRegistry<String, i32> = SubscriberRegistry::new();
        let seen: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        let seen_a = Arc::clone(&seen);
        registry.add(Box::new(move |_| seen_a.lock().unwrap().push("a")));
        let seen_b = Arc::clone(&seen);
        registry.add(Box::new(move |_| seen_b.lock().unwrap().push("b")));

        let event = EvictionEvent::new("key".to_string(), 1);
        registry.notify(&event);

        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_removed_subscriber_is_not_notified() {
        let mut registry: SubscriberRegistry<String, i32> = SubscriberRegistry::new();
        let count = Arc::new(Mutex::new(0u32));

        let count_clone = Arc::clone(&count);
        let id = registry.add(Box::new(move |_| *count_clone.lock().unwrap() += 1));

        assert!(registry.remove(id));
        assert_eq!(registry.len(), 0);

        registry.notify(&EvictionEvent::new("key".to_string(), 1));
        assert_eq!(*count.lock().unwrap(), 0);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut registry: SubscriberRegistry<String, i32> = SubscriberRegistry::new();
        registry.add(Box::new(|_| {}));

        let mut other: SubscriberRegistry<String, i32> = SubscriberRegistry::new();
        let foreign_id = other.add(Box::new(|_| {}));

        assert!(!registry.remove(foreign_id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_event_carries_payload_and_timestamp() {
        let before = Utc::now();
        let event = EvictionEvent::new("key1".to_string(), 42);

        assert_eq!(event.key, "key1");
        assert_eq!(event.value, 42);
        assert!(event.timestamp >= before);
        assert!(event.timestamp <= Utc::now());
    }
}
