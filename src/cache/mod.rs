//! # Bounded Key/Value Caching
//!
//! This module implements a generic, bounded, thread-safe key/value cache
//! with capacity-triggered eviction and an eviction notification channel.
//!
//! ## Features
//!
//! - **Strict Capacity Bound**: The entry count never exceeds the configured
//!   capacity after any operation completes
//! - **LRU Eviction**: Least Recently Used eviction policy; reads and
//!   updates both refresh an entry's recency
//! - **Eviction Notifications**: Subscribable events carrying the evicted
//!   (key, value) pair, delivered synchronously before the triggering
//!   insert returns
//! - **Thread-Safe**: All operations may be called concurrently from any
//!   number of tasks
//! - **Metrics**: Hit/miss/eviction statistics collection
//!
//! ## Example
//!
//! ```rust
//! use bounded_cache::cache::{BoundedCache, CacheConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = CacheConfig::builder()
//!     .capacity(10_000)
//!     .build();
//!
//! let cache = BoundedCache::new(config)?;
//!
//! // Store a value
//! cache.insert("query:123".to_string(), "cached response".to_string()).await;
//!
//! // Retrieve it
//! if let Some(value) = cache.get(&"query:123".to_string()).await {
//!     println!("Cache hit: {}", value);
//! }
//!
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entry;
pub mod events;
pub mod store;
pub mod types;

pub use config::{CacheConfig, CacheConfigBuilder};
pub use entry::{CacheEntry, CacheMetadata};
pub use events::{EvictionEvent, SubscriptionId};
pub use store::BoundedCache;
pub use types::CacheStats;
