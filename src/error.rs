//! Error types for the response cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the response cache.
///
/// Lookups and insertions on the cache itself cannot fail; the one fallible
/// step is turning a request descriptor into a cache key, which requires the
/// descriptor to be serializable.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The request descriptor could not be serialized into a cache key
    #[error("cache key computation failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the response cache.
pub type Result<T> = std::result::Result<T, CacheError>;
