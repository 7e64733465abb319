//! Cache Module
//!
//! In-memory memoization of backend reads: lazy TTL expiry, substring
//! invalidation, and canonical key construction.

mod entry;
pub mod keys;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

use std::sync::Arc;

use tokio::sync::RwLock;

// == Shared Handle ==
/// The process-wide cache handle.
///
/// One coarse lock around the whole key space: contention is low, critical
/// sections are short, and no lock is ever held across an await. Reads take
/// the write half too, since `get` updates counters and performs lazy
/// purges.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Creates an empty shared cache.
pub fn shared() -> SharedCache {
    Arc::new(RwLock::new(CacheStore::new()))
}
