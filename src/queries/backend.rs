//! Backend Seam
//!
//! The read surface of the hosted data service. The platform binds this
//! trait to its SDK client; tests use an in-memory double.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

// == Backend Trait ==
/// Async read operations the hosted backend provides.
///
/// Rows come back type-erased; callers decide the shape. Mutations are
/// deliberately absent from this seam: writes go through the SDK directly,
/// and the mutation handler invalidates the affected cache families once
/// the write has completed.
#[async_trait]
pub trait Backend {
    /// Fetches a single row by id, optionally with a named expansion
    /// (e.g. a property together with its images).
    async fn fetch_one(&self, resource: &str, id: &str, variant: Option<&str>) -> Result<Value>;

    /// Fetches rows matching a filter set.
    async fn fetch_list(&self, resource: &str, filters: &Value) -> Result<Value>;

    /// Fetches a resource's aggregate statistics.
    async fn fetch_stats(&self, resource: &str) -> Result<Value>;
}
