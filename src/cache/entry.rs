//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value together with the instant it was last written.
///
/// Entries do not carry their own TTL; the owning store applies one TTL to
/// every entry it holds. `written_at` is monotonic, so entry age is immune
/// to wall-clock adjustments.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Instant of the most recent write
    pub written_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry written now.
    pub fn new(value: V) -> Self {
        Self {
            value,
            written_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was last written.
    pub fn age(&self) -> Duration {
        self.written_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is expired once its age reaches the TTL
    /// (`age >= ttl`), so at exactly the TTL an entry is no longer served.
    /// A zero TTL therefore expires everything immediately.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}
