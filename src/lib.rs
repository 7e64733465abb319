//! Lodgecache - client-side query cache for a rental platform's data layer
//!
//! Memoizes backend reads (properties, bookings, guests, hosts, reviews,
//! availability calendars, contact messages, payment configuration) in a
//! process-wide in-memory store with tiered TTL expiry, and invalidates
//! whole families of cached queries once a mutation completes.

pub mod cache;
pub mod config;
pub mod error;
pub mod queries;

pub use cache::{CacheStats, CacheStore, SharedCache};
pub use config::{CacheConfig, Tier};
pub use error::CacheError;
pub use queries::{Backend, QueryClient};
