//! Cache Statistics Module
//!
//! Tracks cache performance counters: hits, misses, and invalidations.

use serde::Serialize;

// == Cache Stats ==
/// Performance counters for the query cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of reads served from the cache
    pub hits: u64,
    /// Number of reads that found nothing (absent or expired)
    pub misses: u64,
    /// Number of entries removed by explicit delete/pattern invalidation
    pub invalidations: u64,
    /// Current number of resident entries
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Invalidations ==
    /// Adds `count` removed entries to the invalidation counter.
    pub fn record_invalidations(&mut self, count: u64) {
        self.invalidations += count;
    }

    // == Update Entry Count ==
    /// Updates the resident entry count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.invalidations, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_reads() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_record_invalidations() {
        let mut stats = CacheStats::new();
        stats.record_invalidations(3);
        stats.record_invalidations(1);
        assert_eq!(stats.invalidations, 4);
    }

    #[test]
    fn test_set_total_entries() {
        let mut stats = CacheStats::new();
        stats.set_total_entries(42);
        assert_eq!(stats.total_entries, 42);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"hits\":1"));
        assert!(json.contains("\"misses\":0"));
    }
}
