//! Cache Module
//!
//! Provides bounded in-memory caching across two storage tiers with LRU
//! demotion and promotion.

mod entry;
mod events;
mod recency;
mod stats;
mod store;
mod tier;


// Re-export public types
pub use entry::CacheEntry;
pub use events::{CacheEvent, EventListener};
pub use recency::RecencyTracker;
pub use stats::CacheStats;
pub use store::{CacheSize, TieredCache};
pub use tier::{FastTier, SecondaryTier};

// == Public Constants ==
/// Maximum allowed value size in bytes, enforced at the API boundary.
/// Matches the default secondary budget: a larger value could never survive
/// demotion.
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MiB
