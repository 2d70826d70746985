//! Expiring Cache Module
//!
//! Concurrent handle over [`CacheStore`]: shares the store behind a
//! read-write lock and owns the background sweep task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::tasks::spawn_cleanup_task;

// == Expiring Cache ==
/// Thread-safe expiring key-value cache with background cleanup.
///
/// Entries expire a fixed TTL after their last write. Expired entries are
/// pruned lazily on read and, when a cleanup interval is configured, by a
/// periodic background sweep owned by this handle. Closing or dropping the
/// cache stops the sweep, so no background work outlives the handle.
///
/// The handle is cheap to share: all methods other than [`close`] take
/// `&self`, so an `Arc<ExpiringCache<V>>` can be used from many tasks at
/// once.
///
/// [`close`]: ExpiringCache::close
#[derive(Debug)]
pub struct ExpiringCache<V> {
    /// Shared store, also referenced by the sweep task
    store: Arc<RwLock<CacheStore<V>>>,
    /// Background sweep task, present when a cleanup interval was configured
    sweeper: Option<JoinHandle<()>>,
}

impl<V> ExpiringCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates a cache whose entries expire `ttl` after their last write,
    /// swept for expired entries every `cleanup_interval`.
    ///
    /// A zero `cleanup_interval` disables the sweep entirely; entries are
    /// then pruned only lazily, when a read finds them expired. When the
    /// sweep is enabled this must be called from within a Tokio runtime.
    pub fn new(ttl: Duration, cleanup_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let sweeper = if cleanup_interval.is_zero() {
            None
        } else {
            Some(spawn_cleanup_task(Arc::clone(&store), cleanup_interval))
        };

        Self { store, sweeper }
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl, config.cleanup_interval)
    }

    // == Get ==
    /// Returns the value stored under `key` if a fresh entry exists.
    ///
    /// Takes the write lock even though this is a read: lookups prune
    /// expired entries and update the hit/miss counters.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.store.write().await.get(key)
    }

    // == Set ==
    /// Inserts or overwrites the value under `key`, resetting its age.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        self.store.write().await.set(key.into(), value);
    }

    // == Invalidate ==
    /// Removes the entry under `key`, returning whether one was present.
    pub async fn invalidate(&self, key: &str) -> bool {
        self.store.write().await.invalidate(key)
    }

    // == Clear ==
    /// Removes every entry.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    // == Length ==
    /// Current number of entries, expired-but-unswept included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Close ==
    /// Stops the background sweep. Safe to call more than once.
    ///
    /// The cache stays usable afterwards; it simply degrades to lazy
    /// pruning, as if it had been created with a zero cleanup interval.
    pub fn close(&mut self) {
        if let Some(sweeper) = self.sweeper.take() {
            sweeper.abort();
        }
    }
}

impl<V> Drop for ExpiringCache<V> {
    fn drop(&mut self) {
        // The sweep must never outlive the cache that owns it
        if let Some(sweeper) = self.sweeper.take() {
            sweeper.abort();
        }
    }
}
