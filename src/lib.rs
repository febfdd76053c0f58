//! Bounded Cache - an in-process cache with LRU eviction and TTL expiration
//!
//! Provides a fixed-capacity key-value cache ([`BoundedCache`]) with
//! least-recently-used eviction, lazy per-entry TTL expiration and hit/miss
//! analytics, plus a named registry of cache instances ([`CacheRegistry`])
//! with a process-wide default ([`global_cache_registry`]).

pub mod cache;
pub mod config;
pub mod models;
pub mod registry;
pub mod tasks;

pub use cache::{BoundedCache, CacheAnalytics, CacheEntry, LruTracker};
pub use config::CacheConfig;
pub use models::{AnalyticsSnapshot, CacheStateSnapshot, CleanupSummary};
pub use registry::{global_cache_registry, CacheRegistry, SharedCache};
pub use tasks::spawn_cleanup_task;
