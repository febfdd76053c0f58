//! Cache Analytics Module
//!
//! Tracks cache usage counters: hits, misses, sets, deletes and evictions.

use crate::models::AnalyticsSnapshot;

// == Cache Analytics ==
/// Raw analytics counters for a single cache.
///
/// Counters are monotone over a cache's lifetime; `clear()` on the cache
/// does not reset them. Derived values (hit rate) live in
/// [`AnalyticsSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct CacheAnalytics {
    /// Number of successful lookups
    pub hits: u64,
    /// Number of failed lookups (key absent or expired)
    pub misses: u64,
    /// Number of insert/replace operations
    pub sets: u64,
    /// Number of explicit removals
    pub deletes: u64,
    /// Number of entries evicted by the LRU policy
    pub evictions: u64,
}

impl CacheAnalytics {
    // == Constructor ==
    /// Creates a new CacheAnalytics with all counters at zero.
    pub fn new() -> Self {
        Self::default()
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

    // == Record Set ==
    /// Increments the set counter.
    pub fn record_set(&mut self) {
        self.sets += 1;
    }

    // == Record Delete ==
    /// Increments the delete counter.
    pub fn record_delete(&mut self) {
        self.deletes += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Snapshot ==
    /// Returns a serializable snapshot with the derived hit rate.
    pub fn snapshot(&self) -> AnalyticsSnapshot {
        AnalyticsSnapshot::new(self.hits, self.misses, self.sets, self.deletes, self.evictions)
    }
}
