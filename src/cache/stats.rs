//! Cache Statistics Module
//!
//! Tracks lookup hits and misses and how many days were computed.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups answered from an existing entry
    pub hits: u64,
    /// Lookups that had to compute a new entry
    pub misses: u64,
    /// Entries computed by any path (lookups and warming)
    pub computed: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Whether the startup pre-warm has run since the last clear
    pub prewarmed: bool,
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
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_computation(&mut self) {
        self.computed += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
