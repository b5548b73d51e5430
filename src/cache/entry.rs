//! Cache entry management with access bookkeeping

use chrono::{DateTime, Utc};
use std::time::Duration;

/// A cache entry holding an opaque value and its metadata
///
/// The cache never inspects or mutates the stored value; it only maintains
/// the access bookkeeping used for recency ordering and statistics.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value
    pub value: V,

    /// Entry metadata
    pub metadata: CacheMetadata,
}

impl<V> CacheEntry<V> {
    /// Create a new cache entry
    pub fn new(value: V) -> Self {
        let now = Utc::now();

        Self {
            value,
            metadata: CacheMetadata {
                created_at: now,
                accessed_at: now,
                access_count: 0,
                version: 1,
            },
        }
    }

    /// Mark the entry as accessed (updates access time and count)
    pub fn mark_accessed(&mut self) {
        self.metadata.accessed_at = Utc::now();
        self.metadata.access_count += 1;
    }

    /// Replace the value in place, bumping the version
    pub fn update_value(&mut self, new_value: V) {
        self.value = new_value;
        self.metadata.version += 1;
    }

    /// Get the age of the entry
    pub fn age(&self) -> Duration {
        let now = Utc::now();
        (now - self.metadata.created_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0))
    }

    /// Get time since last access
    pub fn time_since_access(&self) -> Duration {
        let now = Utc::now();
        (now - self.metadata.accessed_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0))
    }
}

/// Metadata associated with a cache entry
#[derive(Debug, Clone)]
pub struct CacheMetadata {
    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// Last access time (for recency tracking)
    pub accessed_at: DateTime<Utc>,

    /// Number of times this entry has been accessed
    pub access_count: u64,

    /// Version number (incremented on updates)
    pub version: u64,
}
