//! # Bounded Cache (bounded-cache)
//!
//! A generic, bounded, thread-safe key/value cache with LRU eviction and an
//! eviction notification channel.
//!
//! ## Features
//!
//! - Strict capacity bound enforced under a single lock
//! - LRU eviction with synchronous eviction events
//! - Multiple eviction subscribers with unsubscribe support
//! - Async-first design using tokio
//! - Hit/miss/eviction statistics
//!
//! ## Basic Usage
//!
//! ```rust
//! use bounded_cache::BoundedCache;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cache = BoundedCache::with_capacity(2)?;
//!
//!     cache.insert("a", 1).await;
//!     cache.insert("b", 2).await;
//!     cache.insert("c", 3).await; // evicts "a", the least recently used
//!
//!     assert_eq!(cache.get(&"a").await, None);
//!     assert_eq!(cache.get(&"c").await, Some(3));
//!     Ok(())
//! }
//! ```
//!
//! ## Eviction Notifications
//!
//! Subscribers receive every capacity eviction synchronously, in
//! registration order, before the triggering insert returns. Explicit
//! removals and [`clear`](cache::BoundedCache::clear) do not notify.
//!
//! ```rust
//! use bounded_cache::{BoundedCache, EvictionEvent};
//! use std::sync::{Arc, Mutex};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cache = BoundedCache::with_capacity(1)?;
//!
//!     let evicted: Arc<Mutex<Vec<(String, i32)>>> = Arc::new(Mutex::new(Vec::new()));
//!     let log = Arc::clone(&evicted);
//!     let id = cache
//!         .subscribe(move |event: &EvictionEvent<String, i32>| {
//!             log.lock().unwrap().push((event.key.clone(), event.value));
//!         })
//!         .await;
//!
//!     cache.insert("first".to_string(), 1).await;
//!     cache.insert("second".to_string(), 2).await; // evicts "first"
//!
//!     assert_eq!(evicted.lock().unwrap().as_slice(), &[("first".to_string(), 1)]);
//!
//!     cache.unsubscribe(id).await;
//!     Ok(())
//! }
//! ```
//!
//! ## Statistics
//!
//! ```rust
//! use bounded_cache::{BoundedCache, CacheConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = CacheConfig::builder()
//!         .capacity(100)
//!         .enable_metrics(true)
//!         .build();
//!     let cache = BoundedCache::new(config)?;
//!
//!     cache.insert("k", "v").await;
//!     cache.get(&"k").await;
//!     cache.get(&"missing").await;
//!
//!     let stats = cache.stats().await;
//!     assert_eq!(stats.hits, 1);
//!     assert_eq!(stats.misses, 1);
//!     println!("{}", stats);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;

// Re-export main types for convenience
pub use cache::{
    BoundedCache, CacheConfig, CacheConfigBuilder, CacheEntry, CacheMetadata, CacheStats,
    EvictionEvent, SubscriptionId,
};
pub use error::{CacheError, Result};
