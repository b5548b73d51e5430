//! Error types for cache operations
//!
//! The error surface is deliberately narrow: once a cache has been
//! constructed with a valid configuration, no public operation can fail.
//! Absent keys are reported as `None`, never as errors.

use thiserror::Error;

/// Main error type for cache operations
#[derive(Error, Debug)]
pub enum CacheError {
    /// Configuration error - invalid construction parameters
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CacheError::Config("capacity must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: capacity must be greater than 0"
        );
    }
}
