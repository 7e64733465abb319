//! Error types for the query cache
//!
//! Provides unified error handling using thiserror. A cache miss is not an
//! error anywhere in this crate; these variants cover the backend seam and
//! key construction only. The store itself has no failure modes.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cached query layer.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backend rejected or failed a read
    #[error("backend request failed: {0}")]
    Backend(String),

    /// A filter set could not be serialized into a canonical cache key
    #[error("failed to encode cache key: {0}")]
    KeyEncoding(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cached query layer.
pub type Result<T> = std::result::Result<T, CacheError>;
