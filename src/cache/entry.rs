//! Cache Entry Module
//!
//! Defines a single memoized query result with its expiry metadata.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A cached query result with an absolute expiry.
///
/// The payload is kept type-erased; callers declare the expected shape
/// when reading it back out of the store.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored query result
    pub value: Value,
    /// Insertion timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl` from now.
    pub fn new(value: Value, ttl: Duration) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            created_at: now,
            expires_at: now + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to `expires_at`, so a zero-TTL entry is stale
    /// immediately.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime in milliseconds; zero once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
