//! Main cache store implementation with a strict capacity bound and LRU eviction

use crate::cache::{
    config::CacheConfig,
    entry::CacheEntry,
    events::{EvictionEvent, SubscriberRegistry, SubscriptionId},
    types::CacheStats,
};
use crate::error::Result;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Bounded key/value cache with LRU eviction and eviction notifications
///
/// This implementation provides:
/// - Thread-safe async access via RwLock
/// - A strict capacity bound: the entry count never exceeds the configured
///   capacity after any operation completes
/// - LRU eviction when the bound is reached, with the evicted (key, value)
///   pair delivered synchronously to registered subscribers
/// - Hit/miss/eviction statistics collection
///
/// The map, the recency queue, the statistics, and the subscriber registry
/// all live behind a single lock, so every compound mutation is atomic and
/// an unsubscribe can never race a firing event.
pub struct BoundedCache<K, V> {
    /// Cache configuration
    config: CacheConfig,

    /// Internal storage
    store: Arc<RwLock<CacheStore<K, V>>>,
}

/// Internal cache storage
struct CacheStore<K, V> {
    /// Main storage: key -> entry
    entries: HashMap<K, CacheEntry<V>>,

    /// Recency tracking: front is the next eviction candidate
    /// Invariant: holds exactly one occurrence of every key in `entries`
    recency_queue: VecDeque<K>,

    /// Eviction subscribers
    subscribers: SubscriberRegistry<K, V>,

    /// Current cache statistics
    stats: CacheStats,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new cache with the given configuration
    ///
    /// Fails with [`CacheError::Config`](crate::error::CacheError::Config)
    /// if the configured capacity is zero.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        info!("Initializing bounded cache with config: {:?}", config);

        let store = CacheStore {
            entries: HashMap::new(),
            recency_queue: VecDeque::new(),
            subscribers: SubscriberRegistry::new(),
            stats: CacheStats::default(),
        };

        Ok(Self {
            config,
            store: Arc::new(RwLock::new(store)),
        })
    }

    /// Create a cache with the given capacity and default configuration
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(CacheConfig::builder().capacity(capacity).build())
    }

    /// Insert a value into the cache, or update the value of an existing key
    ///
    /// Both paths refresh the key's recency. If inserting a new key pushes
    /// the entry count over the capacity, the least recently used entry is
    /// evicted and every registered subscriber is notified before this call
    /// returns. A panicking subscriber unwinds into this call.
    pub async fn insert(&self, key: K, value: V) {
        let mut store = self.store.write().await;

        if let Some(existing) = store.entries.get_mut(&key) {
            debug!("Updating existing cache entry");
            existing.update_value(value);
            // A write counts as an access: move to the back of the queue
            store.recency_queue.retain(|k| k != &key);
            store.recency_queue.push_back(key);
            if self.config.enable_metrics {
                store.stats.updates += 1;
            }
        } else {
            debug!("Inserting new cache entry");
            store.entries.insert(key.clone(), CacheEntry::new(value));
            store.recency_queue.push_back(key);
            if self.config.enable_metrics {
                store.stats.insertions += 1;
            }
            self.evict_over_capacity(&mut store);
        }
    }

    /// Get a value from the cache
    ///
    /// A hit hands back a clone of the stored value, updates the entry's
    /// access metadata, and moves the key to the back of the recency queue.
    /// A miss has no side effect beyond the statistics.
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut store = self.store.write().await;

        if let Some(entry) = store.entries.get_mut(key) {
            entry.mark_accessed();
            let value = entry.value.clone();

            store.recency_queue.retain(|k| k != key);
            store.recency_queue.push_back(key.clone());

            if self.config.enable_metrics {
                store.stats.hits += 1;
            }
            debug!("Cache hit");
            Some(value)
        } else {
            if self.config.enable_metrics {
                store.stats.misses += 1;
            }
            debug!("Cache miss");
            None
        }
    }

    /// Check if a key exists in the cache (without updating its recency)
    pub async fn contains_key(&self, key: &K) -> bool {
        let store = self.store.read().await;
        store.entries.contains_key(key)
    }

    /// Remove a specific entry from the cache
    ///
    /// Returns the removed value if the key was present. The key's recency
    /// queue occurrence is purged eagerly, so a removed key can never be
    /// selected as an eviction candidate. Fires no eviction event.
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut store = self.store.write().await;

        if let Some(entry) = store.entries.remove(key) {
            store.recency_queue.retain(|k| k != key);
            if self.config.enable_metrics {
                store.stats.removals += 1;
            }
            debug!("Removed cache entry");
            Some(entry.value)
        } else {
            None
        }
    }

    /// Clear all entries from the cache
    ///
    /// Fires no eviction events; clearing is a distinct terminal operation,
    /// not a sequence of individual evictions.
    pub async fn clear(&self) {
        let mut store = self.store.write().await;

        let count = store.entries.len();
        store.entries.clear();
        store.recency_queue.clear();

        info!("Cleared {} entries from cache", count);
    }

    /// Register an eviction subscriber
    ///
    /// The callback is invoked synchronously for every capacity eviction, in
    /// registration order, on the task performing the triggering insert.
    /// Callbacks run under the cache's internal lock and must not call back
    /// into the cache.
    pub async fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&EvictionEvent<K, V>) + Send + Sync + 'static,
    {
        let mut store = self.store.write().await;
        let id = store.subscribers.add(Box::new(callback));
        debug!("Registered eviction subscriber {}", id);
        id
    }

    /// Deregister an eviction subscriber
    ///
    /// Returns whether a subscriber was removed; an unknown id is a no-op.
    pub async fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut store = self.store.write().await;
        let removed = store.subscribers.remove(id);
        if removed {
            debug!("Deregistered eviction subscriber {}", id);
        }
        removed
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        let mut stats = store.stats.clone();
        stats.entries = store.entries.len();
        stats
    }

    /// Get number of entries in cache
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.entries.len()
    }

    /// Check if cache is empty
    pub async fn is_empty(&self) -> bool {
        let store = self.store.read().await;
        store.entries.is_empty()
    }

    /// Get number of registered eviction subscribers
    pub async fn subscriber_count(&self) -> usize {
        let store = self.store.read().await;
        store.subscribers.len()
    }

    /// Get the configured capacity
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Internal: evict least recently used entries until the bound holds
    ///
    /// Runs under the write lock held by the caller, so each evicted entry's
    /// removal and its notification are atomic with the triggering insert.
    fn evict_over_capacity(&self, store: &mut CacheStore<K, V>) {
        while store.entries.len() > self.config.capacity {
            if let Some(key) = store.recency_queue.pop_front() {
                if let Some(entry) = store.entries.remove(&key) {
                    debug!("Evicting least recently used entry");
                    if self.config.enable_metrics {
                        store.stats.evictions += 1;
                    }
                    let event = EvictionEvent::new(key, entry.value);
                    store.subscribers.notify(&event);
                }
            } else {
                break;
            }
        }
    }
}
