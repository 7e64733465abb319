//! Cached Query Client
//!
//! Read-through wrappers around the backend seam, plus the invalidation
//! contract mutation handlers rely on.

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::cache::{self, keys, CacheStats, SharedCache};
use crate::config::{CacheConfig, Tier};
use crate::error::Result;
use crate::queries::{Backend, ResourceSpec};

// == Query Client ==
/// Cached facade over the backend's read surface.
///
/// Reads consult the cache first and fall through to the backend on a
/// miss, storing the result under the resource's TTL tier. Writes happen
/// outside this type; the mutation handler calls an `invalidate_*` method
/// once the write completes. A read already in flight when an invalidation
/// runs may still repopulate the cache with pre-write data; that staleness
/// window is bounded by the entry's TTL and accepted, the same as for any
/// client that issued its read a moment before the write.
pub struct QueryClient<B> {
    backend: B,
    cache: SharedCache,
    config: CacheConfig,
}

impl<B: Backend> QueryClient<B> {
    // == Constructors ==
    /// Creates a client with its own empty cache.
    pub fn new(backend: B, config: CacheConfig) -> Self {
        Self::with_cache(backend, config, cache::shared())
    }

    /// Creates a client over an existing shared cache.
    ///
    /// The platform constructs one cache at startup and injects it here,
    /// so every query function reads through the same memoization surface.
    pub fn with_cache(backend: B, config: CacheConfig, cache: SharedCache) -> Self {
        Self {
            backend,
            cache,
            config,
        }
    }

    /// The underlying shared cache handle.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // == Cached Reads ==
    /// Single-entity read.
    pub async fn fetch_one(&self, spec: &ResourceSpec, id: &str) -> Result<Value> {
        let key = keys::detail_key(spec.namespace, id);
        self.read_through(&key, spec.detail_tier, || {
            self.backend.fetch_one(spec.namespace, id, None)
        })
        .await
    }

    /// Single-entity read with a named expansion (e.g. `"images"`),
    /// cached separately from the plain detail read.
    pub async fn fetch_one_variant(
        &self,
        spec: &ResourceSpec,
        id: &str,
        variant: &str,
    ) -> Result<Value> {
        let key = keys::detail_variant_key(spec.namespace, id, variant);
        self.read_through(&key, spec.detail_tier, || {
            self.backend.fetch_one(spec.namespace, id, Some(variant))
        })
        .await
    }

    /// List/search read.
    ///
    /// The filter set is canonicalized once and shared between the cache
    /// key and the backend call, so logically identical queries always
    /// land on the same entry.
    pub async fn fetch_list<F: Serialize>(&self, spec: &ResourceSpec, filters: &F) -> Result<Value> {
        let filters = serde_json::to_value(filters)?;
        let key = keys::list_key(spec.namespace, &filters)?;
        self.read_through(&key, spec.list_tier, || {
            self.backend.fetch_list(spec.namespace, &filters)
        })
        .await
    }

    /// Aggregate statistics read.
    pub async fn fetch_stats(&self, spec: &ResourceSpec) -> Result<Value> {
        let key = keys::stats_key(spec.namespace);
        self.read_through(&key, spec.stats_tier, || {
            self.backend.fetch_stats(spec.namespace)
        })
        .await
    }

    // == Read Through ==
    /// Cache-first read: a hit short-circuits, a miss awaits `fetch` with
    /// the lock released and stores the result under `tier`.
    async fn read_through<F, Fut>(&self, key: &str, tier: Tier, fetch: F) -> Result<Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        {
            let mut cache = self.cache.write().await;
            if let Some(hit) = cache.get(key) {
                debug!(key, "cache hit");
                return Ok(hit);
            }
        }

        debug!(key, "cache miss, fetching from backend");
        let value = fetch().await?;

        self.cache
            .write()
            .await
            .set(key, value.clone(), self.config.ttl(tier));
        Ok(value)
    }

    // == Invalidation ==
    /// Drops one entity's cached detail read and every variant of it.
    pub async fn invalidate_entity(&self, spec: &ResourceSpec, id: &str) {
        let mut cache = self.cache.write().await;
        cache.delete(&keys::detail_key(spec.namespace, id));
        cache.clear_pattern(&keys::detail_prefix(spec.namespace, id));
    }

    /// Drops every cached list/search result and the stats aggregate of a
    /// resource.
    pub async fn invalidate_resource(&self, spec: &ResourceSpec) {
        let mut cache = self.cache.write().await;
        let removed = cache.clear_pattern(&keys::list_prefix(spec.namespace));
        cache.delete(&keys::stats_key(spec.namespace));
        debug!(namespace = spec.namespace, removed, "invalidated list family");
    }

    /// Full invalidation contract for a completed write: the touched
    /// entity when its id is known, the resource's list and stats
    /// families, and every extra key family the resource declares it
    /// stales.
    ///
    /// Callers sequence this after the backend write has completed, never
    /// before.
    pub async fn invalidate_after_write(&self, spec: &ResourceSpec, id: Option<&str>) {
        let mut cache = self.cache.write().await;
        if let Some(id) = id {
            cache.delete(&keys::detail_key(spec.namespace, id));
            cache.clear_pattern(&keys::detail_prefix(spec.namespace, id));
        }
        cache.clear_pattern(&keys::list_prefix(spec.namespace));
        cache.delete(&keys::stats_key(spec.namespace));
        for prefix in spec.also_invalidates {
            cache.clear_pattern(prefix);
        }
        debug!(namespace = spec.namespace, "invalidated after write");
    }

    // == Maintenance ==
    /// Snapshot of the cache's performance counters.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Empties the cache entirely. Test isolation and sign-out both go
    /// through here so one session's reads never leak into the next.
    pub async fn reset_cache(&self) {
        self.cache.write().await.clear();
    }
}
