//! Configuration for the cache system

use crate::error::{CacheError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the bounded cache
///
/// The capacity is fixed for the lifetime of the cache; there is no way to
/// resize a cache after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries in the cache
    /// Prevents unbounded memory growth
    pub capacity: usize,

    /// Enable hit/miss/eviction statistics collection
    pub enable_metrics: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            // 10,000 entries default
            capacity: 10_000,
            enable_metrics: true,
        }
    }
}

impl CacheConfig {
    /// Create a new builder for cache configuration
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::Config(
                "capacity must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for cache configuration
#[derive(Debug, Default)]
pub struct CacheConfigBuilder {
    capacity: Option<usize>,
    enable_metrics: Option<bool>,
}

impl CacheConfigBuilder {
    /// Set the maximum number of cache entries
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Enable or disable statistics collection
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = Some(enable);
        self
    }

    /// Build the cache configuration
    ///
    /// Validation happens when the configuration is handed to
    /// [`BoundedCache::new`](crate::cache::BoundedCache::new).
    pub fn build(self) -> CacheConfig {
        let defaults = CacheConfig::default();

        CacheConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            enable_metrics: self.enable_metrics.unwrap_or(defaults.enable_metrics),
        }
    }
}
