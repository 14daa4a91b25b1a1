//! Response Cache Store Module
//!
//! Keyed TTL store for cached HTTP response payloads. Entries are expired
//! lazily: `retrieve` refuses to serve a stale entry but leaves it in the
//! map until it is overwritten, invalidated, cleared, or purged by the
//! background sweep.

use std::collections::HashMap;

use bytes::Bytes;

use crate::cache::CacheEntry;

// == Response Cache ==
/// In-memory store mapping fingerprint keys to cached response payloads.
#[derive(Debug, Default)]
pub struct ResponseCache {
    /// Key to entry storage
    entries: HashMap<String, CacheEntry>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty response cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Create ==
    /// Stores a payload under the given key with the given TTL.
    ///
    /// An existing entry under the same key is overwritten wholesale and
    /// its TTL restarts. This operation never fails.
    ///
    /// # Arguments
    /// * `key` - The fingerprint key to store under
    /// * `payload` - The response payload
    /// * `ttl_seconds` - Time to live in seconds
    pub fn create(&mut self, key: String, payload: Bytes, ttl_seconds: u64) {
        self.entries.insert(key, CacheEntry::new(payload, ttl_seconds));
    }

    // == Retrieve ==
    /// Returns the payload and remaining TTL in seconds for a live entry.
    ///
    /// Returns `None` when the key is absent or the entry has expired.
    /// Expired entries are not removed here.
    ///
    /// # Arguments
    /// * `key` - The fingerprint key to look up
    pub fn retrieve(&self, key: &str) -> Option<(Bytes, f64)> {
        let entry = self.entries.get(key)?;
        if entry.is_expired() {
            return None;
        }
        Some((entry.payload.clone(), entry.remaining_secs()))
    }

    // == Invalidate ==
    /// Removes an entry by key. Removing an absent key is a no-op.
    #[allow(dead_code)]
    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Clear ==
    /// Removes all entries.
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, live and expired.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
