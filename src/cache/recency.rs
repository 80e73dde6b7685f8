//! Recency Tracker Module
//!
//! Implements least-recently-used ordering for tier eviction.

use std::collections::VecDeque;

// == Recency Tracker ==
/// Tracks access order for LRU eviction within a single tier.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// The order mirrors the recency markers stamped on entries: a key is moved
/// to the front exactly when its entry's marker is refreshed, so the back of
/// the deque always holds the key with the lowest marker in the tier.
#[derive(Debug, Default)]
pub struct RecencyTracker {
    /// Order of keys by access time
    order: VecDeque<u64>,
}

impl RecencyTracker {
    // == Constructor ==
    /// Creates a new empty recency tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to front).
    ///
    /// If key exists, removes it first then adds to front.
    /// If key is new, just adds to front.
    pub fn touch(&mut self, key: u64) {
        // Remove existing occurrence
        self.remove(key);
        // Add to front (most recent)
        self.order.push_front(key);
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: u64) {
        self.order.retain(|&k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<u64> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<u64> {
        self.order.back().copied()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: u64) -> bool {
        self.order.iter().any(|&k| k == key)
    }
}
