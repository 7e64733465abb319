//! Cache Store Module
//!
//! The process-wide memoization map: HashMap storage, lazy TTL expiry,
//! and substring-based bulk invalidation.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// In-memory store for memoized backend reads.
///
/// Expiry is checked at read time; nothing here runs on a timer and no
/// operation performs I/O. A miss is a normal outcome, never an error, and
/// the same goes for deleting an absent key or clearing a pattern that
/// matches nothing.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns the cached value for `key`, or `None` on a miss.
    ///
    /// An expired entry encountered here is removed before the miss is
    /// reported, so stale data is never served.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            return Some(value);
        }

        self.stats.record_miss();
        None
    }

    // == Get As ==
    /// Typed read: the caller declares the expected shape at the call
    /// site. The store performs no schema validation of its own; a cached
    /// value that does not decode as `T` is reported as a miss.
    pub fn get_as<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!(key, %err, "cached value did not match requested shape");
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key` with expiry `now + ttl`.
    ///
    /// Overwrites any prior entry for that key, resetting its TTL.
    pub fn set(&mut self, key: impl Into<String>, value: Value, ttl: Duration) {
        self.entries.insert(key.into(), CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes a single entry. Deleting an absent key is a no-op.
    pub fn delete(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.stats.record_invalidations(1);
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Clear Pattern ==
    /// Removes every entry whose key contains `pattern` and returns how
    /// many were dropped. Matching nothing is a normal no-op.
    ///
    /// Mutation handlers use this to drop whole families of parameterized
    /// keys (every page/sort/filter combination of a cached list) without
    /// knowing the exact set that was cached. The scan is linear over all
    /// keys, which is acceptable at the tens-to-hundreds of entries a
    /// session accumulates.
    pub fn clear_pattern(&mut self, pattern: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.contains(pattern));
        let removed = before - self.entries.len();

        self.stats.record_invalidations(removed as u64);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Drops every entry and resets statistics.
    ///
    /// This is the reset operation for test isolation; sign-out flows use
    /// it as well so one account's reads never leak into the next.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::new();
    }

    // == Purge Expired ==
    /// Eagerly removes expired entries, returning how many were dropped.
    ///
    /// Lazy expiry already guarantees stale data is never served; this
    /// exists for hosts that want to bound how long dead entries linger.
    /// It is never called on a timer by this crate.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the performance counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Number of resident entries, counting expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
