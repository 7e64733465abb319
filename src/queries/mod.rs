//! Query Layer
//!
//! Cached read-through wrappers over the backend seam, plus the
//! per-resource caching policies mutation handlers use to invalidate
//! exactly what they stale.
//!
//! The view layer never touches the cache directly; every access runs
//! through [`QueryClient`].

mod backend;
mod client;
pub mod resources;

// Re-export public types
pub use backend::Backend;
pub use client::QueryClient;
pub use resources::{
    ResourceSpec, AVAILABILITY, BOOKINGS, GUESTS, HOSTS, MESSAGES, PAYMENT_CONFIG, PROPERTIES,
    REVIEWS,
};
