//! Configuration Module
//!
//! TTL tiers for cached reads, loaded from environment variables with
//! hard defaults.

use std::env;
use std::time::Duration;

// == TTL Tier ==
/// TTL tier applied to a cached read.
///
/// Tiers follow data volatility: list/search results go stale as soon as
/// anything in the underlying table changes, single-entity reads change
/// less often, and aggregate statistics rarely move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Seconds-scale, for volatile list/search results
    Short,
    /// Minutes-scale, for single-entity reads
    Medium,
    /// Tens of minutes, for rarely-changing aggregates
    Long,
}

// == Cache Config ==
/// Cache configuration parameters.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Duration of the SHORT tier
    pub ttl_short: Duration,
    /// Duration of the MEDIUM tier
    pub ttl_medium: Duration,
    /// Duration of the LONG tier
    pub ttl_long: Duration,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading tier durations from
    /// environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SHORT` - SHORT tier in seconds (default: 30)
    /// - `CACHE_TTL_MEDIUM` - MEDIUM tier in seconds (default: 300)
    /// - `CACHE_TTL_LONG` - LONG tier in seconds (default: 1800)
    pub fn from_env() -> Self {
        Self {
            ttl_short: Duration::from_secs(env_secs("CACHE_TTL_SHORT", 30)),
            ttl_medium: Duration::from_secs(env_secs("CACHE_TTL_MEDIUM", 300)),
            ttl_long: Duration::from_secs(env_secs("CACHE_TTL_LONG", 1800)),
        }
    }

    /// Resolves a tier to its configured duration.
    pub fn ttl(&self, tier: Tier) -> Duration {
        match tier {
            Tier::Short => self.ttl_short,
            Tier::Medium => self.ttl_medium,
            Tier::Long => self.ttl_long,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_short: Duration::from_secs(30),
            ttl_medium: Duration::from_secs(300),
            ttl_long: Duration::from_secs(1800),
        }
    }
}

fn env_secs(var: &str, default: u64) -> u64 {
    env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
