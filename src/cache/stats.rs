//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, evictions and
//! tier transitions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals (either tier)
    pub hits: u64,
    /// Number of failed cache retrievals (key absent from both tiers)
    pub misses: u64,
    /// Number of entries permanently discarded from the cache
    pub evictions: u64,
    /// Number of entries moved fast -> secondary
    pub demotions: u64,
    /// Number of entries moved secondary -> fast on read hit
    pub promotions: u64,
    /// Current number of entries in the fast tier
    pub fast_entries: usize,
    /// Current cumulative value bytes in the secondary tier
    pub secondary_bytes: usize,
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

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Demotion ==
    /// Increments the demotion counter.
    pub fn record_demotion(&mut self) {
        self.demotions += 1;
    }

    // == Record Promotion ==
    /// Increments the promotion counter.
    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    // == Update Sizes ==
    /// Updates the current tier usage figures.
    pub fn set_sizes(&mut self, fast_entries: usize, secondary_bytes: usize) {
        self.fast_entries = fast_entries;
        self.secondary_bytes = secondary_bytes;
    }
}
