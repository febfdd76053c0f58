//! Configuration Module
//!
//! Cache construction parameters, loadable from environment variables.

use std::env;
use std::time::Duration;

/// Default maximum number of entries a cache may hold.
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Construction parameters for a [`BoundedCache`](crate::BoundedCache).
///
/// All fields have defaults; a `CacheConfig::default()` cache holds up to
/// [`DEFAULT_MAX_SIZE`] entries, never expires them, and records analytics.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// Time-to-live for entries, measured from creation; None = no expiration
    pub ttl: Option<Duration>,
    /// Whether hit/miss/set/delete/eviction counters are recorded
    pub enable_analytics: bool,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 100)
    /// - `CACHE_TTL_MS` - Entry TTL in milliseconds (default: unset, no expiration)
    /// - `CACHE_ANALYTICS` - Whether to record analytics (default: true)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            max_size: env::var("CACHE_MAX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_SIZE),
            ttl: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis),
            enable_analytics: env::var("CACHE_ANALYTICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Returns the configured TTL in whole milliseconds, if any.
    pub fn ttl_ms(&self) -> Option<u64> {
        self.ttl.map(|ttl| ttl.as_millis() as u64)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            ttl: None,
            enable_analytics: true,
        }
    }
}
