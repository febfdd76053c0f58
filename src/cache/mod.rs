//! Cache Module
//!
//! Provides a bounded in-memory cache with TTL expiration and LRU eviction.

mod analytics;
mod entry;
mod lru;
mod store;


// Re-export public types
pub use analytics::CacheAnalytics;
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use store::BoundedCache;
