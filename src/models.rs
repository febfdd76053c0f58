//! Snapshot and summary types
//!
//! Serializable views of cache analytics and state, for diagnostics and
//! export. These are plain data carriers; the counters themselves live in
//! [`CacheAnalytics`](crate::cache::CacheAnalytics).

use serde::Serialize;

/// Point-in-time view of a cache's analytics counters.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSnapshot {
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
    /// hits / (hits + misses) as a percentage string, e.g. "50.00%"
    pub hit_rate: String,
}

impl AnalyticsSnapshot {
    /// Creates a snapshot from raw counters, deriving the hit rate.
    ///
    /// The hit rate is `"0.00%"` when no lookups have occurred.
    pub fn new(hits: u64, misses: u64, sets: u64, deletes: u64, evictions: u64) -> Self {
        let lookups = hits + misses;
        let hit_rate = if lookups > 0 {
            format!("{:.2}%", hits as f64 / lookups as f64 * 100.0)
        } else {
            "0.00%".to_string()
        };
        Self {
            hits,
            misses,
            sets,
            deletes,
            evictions,
            hit_rate,
        }
    }
}

/// Result of a [`cleanup`](crate::BoundedCache::cleanup) pass.
#[derive(Debug, Clone, Serialize)]
pub struct CleanupSummary {
    /// Whether any entry was removed
    pub cleaned: bool,
    /// Entry count before the pass
    pub size_before: usize,
    /// Entry count after the pass
    pub size_after: usize,
}

/// Active configuration as reported by [`export_state`](crate::BoundedCache::export_state).
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSnapshot {
    /// Maximum number of entries
    pub max_size: usize,
    /// Entry TTL in milliseconds, None = no expiration
    pub ttl_ms: Option<u64>,
}

/// Current entry population as reported by [`export_state`](crate::BoundedCache::export_state).
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    /// Number of tracked entries
    pub size: usize,
    /// Keys of tracked entries, unordered
    pub keys: Vec<String>,
}

/// Full debug snapshot of a cache: configuration, population and analytics.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStateSnapshot {
    /// Active configuration
    pub config: ConfigSnapshot,
    /// Current entry population
    pub state: StateSnapshot,
    /// Analytics counters
    pub analytics: AnalyticsSnapshot,
    /// Capture timestamp in ISO 8601 format
    pub captured_at: String,
}
