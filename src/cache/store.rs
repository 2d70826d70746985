//! Cache Store Module
//!
//! Synchronous cache core: HashMap storage with one TTL applied to every
//! entry and lazy expiration at read time. Locking and the background sweep
//! are layered on top by [`ExpiringCache`](crate::cache::ExpiringCache).

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Cache storage mapping fingerprint keys to timestamped entries.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Maximum entry age before expiry, shared by all entries
    ttl: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store whose entries expire `ttl` after their last
    /// write.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Retrieves the value stored under `key` if a fresh entry exists.
    ///
    /// Freshness is enforced here, at read time: an entry whose age has
    /// reached the TTL is removed and counted as a miss even if the
    /// background sweep has not visited it yet. A stale value is therefore
    /// never returned, no matter how the sweep is scheduled.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(self.ttl) {
                // Prune in place instead of waiting for the sweep
                self.entries.remove(key);
                self.stats.record_expired(1);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists the value is overwritten and its age is
    /// reset, so an entry expires relative to its most recent write. Set
    /// never fails; under concurrent writers the last completed write wins.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    pub fn set(&mut self, key: String, value: V) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Invalidate ==
    /// Removes the entry stored under `key`.
    ///
    /// Returns whether an entry was present. Removing an absent key is not
    /// an error.
    pub fn invalidate(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Remove Expired ==
    /// Removes all entries whose age has reached the TTL.
    ///
    /// This is the body of the background sweep; it is also usable directly
    /// when no sweep task is running. Returns the number of entries removed.
    pub fn remove_expired(&mut self) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(ttl));

        let removed = before - self.entries.len();
        if removed > 0 {
            self.stats.record_expired(removed as u64);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired-but-unswept included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == TTL ==
    /// Returns the TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new(Duration::from_secs(300));
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new(Duration::from_secs(300));

        store.set("key1".to_string(), "value1".to_string());
        let value = store.get("key1");

        assert_eq!(value, Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new(Duration::from_secs(300));

        assert_eq!(store.get("nonexistent"), None);
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_store_invalidate() {
        let mut store = CacheStore::new(Duration::from_secs(300));

        store.set("key1".to_string(), "value1".to_string());

        assert!(store.invalidate("key1"));
        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_invalidate_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new(Duration::from_secs(300));

        assert!(!store.invalidate("nonexistent"));
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(Duration::from_secs(300));

        store.set("key1".to_string(), "value1".to_string());
        store.set("key1".to_string(), "value2".to_string());

        assert_eq!(store.get("key1"), Some("value2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let mut store = CacheStore::new(Duration::from_millis(200));

        store.set("key1".to_string(), "value1".to_string());
        sleep(Duration::from_millis(120));

        // Rewriting restarts the clock for this key
        store.set("key1".to_string(), "value2".to_string());
        sleep(Duration::from_millis(120));

        // 240ms after the first write, but only 120ms after the second
        assert_eq!(store.get("key1"), Some("value2".to_string()));
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new(Duration::from_millis(50));

        store.set("key1".to_string(), "value1".to_string());

        // Accessible immediately
        assert_eq!(store.get("key1"), Some("value1".to_string()));

        // Wait past the TTL
        sleep(Duration::from_millis(80));

        assert_eq!(store.get("key1"), None);
        assert_eq!(store.len(), 0, "expired entry should be pruned on read");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.expired, 1);
    }

    #[test]
    fn test_store_zero_ttl_expires_immediately() {
        let mut store = CacheStore::new(Duration::ZERO);

        store.set("key1".to_string(), "value1".to_string());

        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_expired_entry_counts_in_len_until_pruned() {
        let mut store = CacheStore::new(Duration::from_millis(30));

        store.set("key1".to_string(), "value1".to_string());
        sleep(Duration::from_millis(50));

        // No read has touched the entry yet
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove_expired(), 1);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_clear() {
        let mut store = CacheStore::new(Duration::from_secs(300));

        store.set("key1".to_string(), "value1".to_string());
        store.set("key2".to_string(), "value2".to_string());
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.stats().total_entries, 0);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(Duration::from_secs(300));

        store.set("key1".to_string(), "value1".to_string());
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_store_remove_expired() {
        let mut store = CacheStore::new(Duration::from_millis(50));

        store.set("key1".to_string(), "value1".to_string());
        sleep(Duration::from_millis(80));
        store.set("key2".to_string(), "value2".to_string());

        let removed = store.remove_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("key2"), Some("value2".to_string()));
        assert_eq!(store.stats().expired, 1);
    }

    #[test]
    fn test_store_remove_expired_nothing_to_do() {
        let mut store = CacheStore::new(Duration::from_secs(300));

        store.set("key1".to_string(), "value1".to_string());

        assert_eq!(store.remove_expired(), 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().expired, 0);
    }

    #[test]
    fn test_store_generic_values() {
        #[derive(Debug, Clone, PartialEq)]
        struct Payload {
            body: Vec<u8>,
            status: u16,
        }

        let mut store = CacheStore::new(Duration::from_secs(300));
        let payload = Payload {
            body: b"response".to_vec(),
            status: 200,
        };

        store.set("key1".to_string(), payload.clone());
        assert_eq!(store.get("key1"), Some(payload));
    }
}
