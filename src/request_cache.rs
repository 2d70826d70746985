//! Request Cache Module
//!
//! Narrow facade over fingerprinting and the expiring cache. Callers hand
//! in request descriptors and responses; key computation stays an internal
//! detail, so no caller ever constructs or interprets a cache key.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::cache::{CacheStats, ExpiringCache};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::fingerprint::fingerprint;

// == Request Cache ==
/// Response cache keyed by request fingerprints.
///
/// Composes [`fingerprint`] with [`ExpiringCache`] and holds no state of
/// its own. Two requests share a cache slot exactly when their canonical
/// serializations are identical; any difference in content produces a
/// different slot.
///
/// A lookup miss is `Ok(None)`, the signal to perform the real call and
/// store its result with [`set_response`]. The only error either operation
/// can produce is a request descriptor that cannot be serialized.
///
/// [`set_response`]: RequestCache::set_response
#[derive(Debug)]
pub struct RequestCache<V> {
    cache: ExpiringCache<V>,
}

impl<V> RequestCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates a request cache whose responses expire `ttl` after being
    /// stored, swept every `cleanup_interval`.
    ///
    /// A zero `cleanup_interval` disables the background sweep. When the
    /// sweep is enabled this must be called from within a Tokio runtime.
    pub fn new(ttl: Duration, cleanup_interval: Duration) -> Self {
        Self {
            cache: ExpiringCache::new(ttl, cleanup_interval),
        }
    }

    /// Creates a request cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            cache: ExpiringCache::from_config(config),
        }
    }

    // == Get Response ==
    /// Returns the cached response for `request` if a fresh one exists.
    ///
    /// # Arguments
    /// * `request` - The request descriptor the response was stored under
    ///
    /// # Returns
    /// `Ok(None)` on a miss. Fails only when the request cannot be
    /// serialized into a cache key.
    pub async fn get_response<R>(&self, request: &R) -> Result<Option<V>>
    where
        R: Serialize + ?Sized,
    {
        let key = fingerprint(request)?;
        let response = self.cache.get(&key).await;
        debug!(key = %&key[..8], hit = response.is_some(), "request cache lookup");
        Ok(response)
    }

    // == Set Response ==
    /// Stores the response for `request`, overwriting any previous one and
    /// resetting its age.
    ///
    /// # Arguments
    /// * `request` - The request descriptor to store the response under
    /// * `response` - The response to cache
    pub async fn set_response<R>(&self, request: &R, response: V) -> Result<()>
    where
        R: Serialize + ?Sized,
    {
        let key = fingerprint(request)?;
        debug!(key = %&key[..8], "request cache store");
        self.cache.set(key, response).await;
        Ok(())
    }

    // == Invalidate Response ==
    /// Drops the cached response for `request`, returning whether one was
    /// present.
    pub async fn invalidate_response<R>(&self, request: &R) -> Result<bool>
    where
        R: Serialize + ?Sized,
    {
        let key = fingerprint(request)?;
        Ok(self.cache.invalidate(&key).await)
    }

    // == Stats ==
    /// Returns a snapshot of the underlying cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    // == Length ==
    /// Current number of cached responses.
    pub async fn len(&self) -> usize {
        self.cache.len().await
    }

    /// Returns true if no responses are cached.
    pub async fn is_empty(&self) -> bool {
        self.cache.is_empty().await
    }

    // == Close ==
    /// Stops the background sweep; the cache stays usable in lazy mode.
    pub fn close(&mut self) {
        self.cache.close();
    }
}
