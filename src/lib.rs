//! Reqcache - a content-addressed response cache
//!
//! Avoids repeated expensive remote calls by storing responses under
//! fingerprints of the requests that produced them. A fingerprint is the
//! SHA-256 hash of the request's canonical serialization, so logically
//! equal requests always land on the same cache slot. Entries expire a
//! fixed TTL after their last write, enforced both lazily at read time and
//! by a background sweep that the cache owns and stops on drop.
//!
//! ```
//! use reqcache::RequestCache;
//! use serde::Serialize;
//! use std::time::Duration;
//!
//! #[derive(Serialize)]
//! struct ApiCall<'a> {
//!     method: &'a str,
//!     params: Vec<&'a str>,
//! }
//!
//! # tokio_test::block_on(async {
//! let cache: RequestCache<String> =
//!     RequestCache::new(Duration::from_secs(60), Duration::from_secs(10));
//! let call = ApiCall { method: "item.get", params: vec!["web-01"] };
//!
//! assert_eq!(cache.get_response(&call).await.unwrap(), None);
//! cache.set_response(&call, "payload".to_string()).await.unwrap();
//! assert_eq!(
//!     cache.get_response(&call).await.unwrap(),
//!     Some("payload".to_string()),
//! );
//! # });
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod request_cache;
pub mod tasks;

pub use cache::{CacheEntry, CacheStats, CacheStore, ExpiringCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use fingerprint::{fingerprint, fingerprint_str, FINGERPRINT_LEN};
pub use request_cache::RequestCache;
pub use tasks::spawn_cleanup_task;
