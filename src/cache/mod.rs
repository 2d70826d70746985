//! Cache Module
//!
//! Provides in-memory key-value caching with TTL expiration: timestamped
//! entries, the synchronous store, statistics, and the concurrent handle
//! that owns the background sweep.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use stats::CacheStats;
pub use store::CacheStore;
