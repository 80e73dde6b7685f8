//! Cache Store Module
//!
//! Main cache engine combining the two storage tiers with a logical clock
//! for recency tracking. Reads check the fast tier first; secondary hits are
//! promoted back into the fast tier. Writes always land in the fast tier,
//! demoting its least recently used entry when full.

use serde::Serialize;

use crate::cache::{
    CacheEntry, CacheEvent, CacheStats, EventListener, FastTier, SecondaryTier,
};

// == Cache Size ==
/// Snapshot of current tier usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheSize {
    /// Number of entries in the fast tier
    pub fast_entries: usize,
    /// Cumulative value bytes in the secondary tier
    pub secondary_bytes: usize,
}

// == Tiered Cache ==
/// Bounded two-tier key-value cache with LRU demotion and promotion.
///
/// The fast tier is bounded by entry count, the secondary tier by cumulative
/// value bytes. An entry lives in at most one tier at a time. Entries leave
/// the cache only through [`TieredCache::invalidate`] or when the secondary
/// tier must shed its least recently used entry to stay within budget.
pub struct TieredCache {
    /// Entry-count-bounded tier, checked first on reads
    fast: FastTier,
    /// Byte-budgeted tier holding demoted entries
    secondary: SecondaryTier,
    /// Monotonic logical clock; stamped on every access and insertion
    clock: u64,
    /// Performance statistics
    stats: CacheStats,
    /// Optional structured-event callback
    listener: Option<EventListener>,
}

impl TieredCache {
    // == Constructor ==
    /// Creates a new TieredCache with the given tier limits.
    ///
    /// A fast capacity of zero is treated as one: `put` must always have a
    /// slot to land in.
    ///
    /// # Arguments
    /// * `fast_capacity` - Maximum entry count for the fast tier
    /// * `secondary_budget_bytes` - Byte budget for the secondary tier
    pub fn new(fast_capacity: usize, secondary_budget_bytes: usize) -> Self {
        Self::with_listener(fast_capacity, secondary_budget_bytes, None)
    }

    /// Creates a new TieredCache that reports construction and evictions to
    /// the given listener.
    pub fn with_listener(
        fast_capacity: usize,
        secondary_budget_bytes: usize,
        listener: Option<EventListener>,
    ) -> Self {
        let fast_capacity = fast_capacity.max(1);
        let cache = Self {
            fast: FastTier::new(fast_capacity),
            secondary: SecondaryTier::new(secondary_budget_bytes),
            clock: 0,
            stats: CacheStats::new(),
            listener,
        };
        cache.emit(CacheEvent::Constructed {
            fast_capacity,
            secondary_budget_bytes,
        });
        cache
    }

    // == Put ==
    /// Inserts or replaces the entry for `key` in the fast tier.
    ///
    /// Always succeeds. If the key is resident in the secondary tier it moves
    /// to the fast tier. If the fast tier is full, its least recently used
    /// entry is demoted into the secondary tier, which in turn sheds its own
    /// LRU entries if the demotion would exceed the byte budget.
    pub fn put(&mut self, key: u64, value: String) {
        let marker = self.tick();

        if let Some(entry) = self.fast.get_mut(key) {
            entry.replace(value, marker);
            self.fast.touch(key);
        } else {
            // A key lives in at most one tier; a put on a secondary-resident
            // key moves it to the fast tier.
            self.secondary.remove(key);
            self.insert_into_fast(key, CacheEntry::new(value, marker));
        }

        self.sync_sizes();
    }

    // == Get ==
    /// Retrieves the value for `key`, refreshing its recency.
    ///
    /// Checks the fast tier first. A secondary-tier hit promotes the entry
    /// back into the fast tier (demoting the fast LRU if necessary). Absence
    /// is a normal outcome: `None`, never an error.
    pub fn get(&mut self, key: u64) -> Option<String> {
        let marker = self.tick();

        if let Some(entry) = self.fast.get_mut(key) {
            entry.touch(marker);
            let value = entry.value.clone();
            self.fast.touch(key);
            self.stats.record_hit();
            return Some(value);
        }

        if let Some(mut entry) = self.secondary.remove(key) {
            entry.touch(marker);
            let value = entry.value.clone();
            self.insert_into_fast(key, entry);
            self.stats.record_hit();
            self.stats.record_promotion();
            self.sync_sizes();
            return Some(value);
        }

        self.stats.record_miss();
        None
    }

    // == Invalidate ==
    /// Removes the entry for `key` from whichever tier holds it.
    ///
    /// Returns true if an entry was removed; a miss is a no-op.
    pub fn invalidate(&mut self, key: u64) -> bool {
        let removed =
            self.fast.remove(key).is_some() || self.secondary.remove(key).is_some();
        self.sync_sizes();
        removed
    }

    // == Size ==
    /// Returns current tier usage. No side effects.
    pub fn size(&self) -> CacheSize {
        CacheSize {
            fast_entries: self.fast.len(),
            secondary_bytes: self.secondary.used_bytes(),
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_sizes(self.fast.len(), self.secondary.used_bytes());
        stats
    }

    // == Internal: Clock ==
    /// Advances the logical clock and returns the new marker.
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    // == Internal: Fast Insert ==
    /// Inserts an entry into the fast tier, demoting its LRU entry first if
    /// the tier is full.
    fn insert_into_fast(&mut self, key: u64, entry: CacheEntry) {
        if self.fast.is_full() {
            if let Some((victim_key, victim)) = self.fast.pop_lru() {
                self.demote(victim_key, victim);
            }
        }
        self.fast.insert(key, entry);
    }

    // == Internal: Demotion ==
    /// Moves a fast-tier eviction victim into the secondary tier.
    ///
    /// Sheds the secondary tier's LRU entries until the victim fits. A victim
    /// larger than the entire budget is discarded outright.
    fn demote(&mut self, key: u64, entry: CacheEntry) {
        self.stats.record_demotion();

        if entry.size_bytes > self.secondary.budget_bytes() {
            self.discard(key, entry);
            return;
        }

        while !self.secondary.fits(entry.size_bytes) {
            match self.secondary.pop_lru() {
                Some((victim_key, victim)) => self.discard(victim_key, victim),
                // Unreachable: the entry fits an empty tier.
                None => break,
            }
        }

        self.secondary.insert(key, entry);
    }

    // == Internal: Discard ==
    /// Permanently drops an entry from the cache.
    fn discard(&mut self, key: u64, entry: CacheEntry) {
        self.stats.record_eviction();
        self.emit(CacheEvent::Evicted {
            key,
            size_bytes: entry.size_bytes,
        });
    }

    // == Internal: Events ==
    fn emit(&self, event: CacheEvent) {
        if let Some(listener) = &self.listener {
            listener(&event);
        }
    }

    // == Internal: Sizes ==
    fn sync_sizes(&mut self) {
        self.stats
            .set_sizes(self.fast.len(), self.secondary.used_bytes());
    }

    // == Contains ==
    /// Checks residency without touching recency.
    #[allow(dead_code)]
    pub fn contains(&self, key: u64) -> bool {
        self.fast.contains(key) || self.secondary.contains(key)
    }

    // == Is Empty ==
    /// Returns true if both tiers are empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.fast.len() == 0 && self.secondary.is_empty()
    }
}
