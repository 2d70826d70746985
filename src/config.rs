//! Configuration Module
//!
//! Construction-time parameters for a response cache.

use std::time::Duration;

/// Cache configuration parameters.
///
/// Both values are fixed for the lifetime of the cache they configure.
/// Reading them from files or environment variables is left to the embedding
/// application.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum age an entry may reach before it is considered expired
    pub ttl: Duration,
    /// Interval between background sweep passes; zero disables the sweep
    pub cleanup_interval: Duration,
}

impl CacheConfig {
    /// Creates a config with the given TTL and cleanup interval.
    pub fn new(ttl: Duration, cleanup_interval: Duration) -> Self {
        Self {
            ttl,
            cleanup_interval,
        }
    }

    /// Returns the config with the TTL replaced.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the config with the cleanup interval replaced.
    pub fn with_cleanup_interval(mut self, cleanup_interval: Duration) -> Self {
        self.cleanup_interval = cleanup_interval;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            cleanup_interval: Duration::from_secs(10),
        }
    }
}
