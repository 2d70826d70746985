//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between
/// passes. Each pass acquires the store's write lock only for the removal
/// itself, so other callers are blocked for no longer than one sweep takes.
/// The task never exits on its own; whoever holds the returned handle is
/// responsible for aborting it when the cache shuts down.
///
/// Must be called from within a Tokio runtime.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `interval` - Time between sweep passes
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort the sweep on shutdown.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(300))));
/// let handle = spawn_cleanup_task(store.clone(), Duration::from_secs(10));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(
    store: Arc<RwLock<CacheStore<V>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        debug!(
            interval_ms = interval.as_millis() as u64,
            "cache sweep task started"
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and remove expired entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.remove_expired()
            };

            if removed > 0 {
                debug!(removed, "cache sweep removed expired entries");
            } else {
                trace!("cache sweep found no expired entries");
            }
        }
    })
}
