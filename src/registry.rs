//! Cache Registry Module
//!
//! A named collection of independent cache instances, plus the process-wide
//! default registry used by tooling that wants one isolated cache per
//! component without plumbing a registry around.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tracing::debug;

use crate::cache::BoundedCache;
use crate::config::CacheConfig;
use crate::models::{AnalyticsSnapshot, CleanupSummary};

/// A cache shared between owners. Every cache operation mutates recency or
/// counters, so the handle is a Mutex rather than a reader/writer lock.
pub type SharedCache<V> = Arc<Mutex<BoundedCache<V>>>;

// == Cache Registry ==
/// A named collection of [`BoundedCache`] instances.
///
/// The registry manages lifecycle and aggregation only; it does not wrap or
/// intercept individual cache operations. Caches share no entry storage.
#[derive(Debug)]
pub struct CacheRegistry<V> {
    /// Name -> cache handle
    caches: RwLock<HashMap<String, SharedCache<V>>>,
}

impl<V> CacheRegistry<V> {
    // == Constructor ==
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            caches: RwLock::new(HashMap::new()),
        }
    }

    // == Create ==
    /// Returns the cache registered under `name`, creating it if absent.
    ///
    /// First-writer-wins: when the name is already registered the supplied
    /// `config` is ignored and the existing cache is returned.
    pub fn create(&self, name: &str, config: Option<CacheConfig>) -> SharedCache<V> {
        let mut caches = self.caches.write();
        if let Some(existing) = caches.get(name) {
            return Arc::clone(existing);
        }

        let cache = Arc::new(Mutex::new(BoundedCache::new(config.unwrap_or_default())));
        caches.insert(name.to_string(), Arc::clone(&cache));
        debug!(name, "registered new cache");
        cache
    }

    // == Get ==
    /// Returns the cache registered under `name`, if any. Never creates one.
    pub fn get(&self, name: &str) -> Option<SharedCache<V>> {
        self.caches.read().get(name).map(Arc::clone)
    }

    // == List ==
    /// Returns all registered names, unordered.
    pub fn list(&self) -> Vec<String> {
        self.caches.read().keys().cloned().collect()
    }

    // == Delete ==
    /// Unregisters `name`, returning whether a cache was registered.
    ///
    /// Only the registry's reference is dropped; entries are not cleared, so
    /// outstanding handles keep the cache (and its analytics) alive.
    pub fn delete(&self, name: &str) -> bool {
        let removed = self.caches.write().remove(name).is_some();
        if removed {
            debug!(name, "unregistered cache");
        }
        removed
    }

    // == Cleanup All ==
    /// Runs `cleanup(force = true)` on every registered cache, sequentially.
    ///
    /// Returns each cache's cleanup summary by name. There is no cross-cache
    /// atomicity; caches are independent.
    pub fn cleanup_all(&self) -> HashMap<String, CleanupSummary> {
        let caches: Vec<(String, SharedCache<V>)> = {
            let guard = self.caches.read();
            guard
                .iter()
                .map(|(name, cache)| (name.clone(), Arc::clone(cache)))
                .collect()
        };

        caches
            .into_iter()
            .map(|(name, cache)| {
                let summary = cache.lock().cleanup(true);
                (name, summary)
            })
            .collect()
    }

    // == Global Analytics ==
    /// Returns each registered cache's analytics snapshot by name.
    pub fn global_analytics(&self) -> HashMap<String, AnalyticsSnapshot> {
        let guard = self.caches.read();
        guard
            .iter()
            .map(|(name, cache)| (name.clone(), cache.lock().analytics()))
            .collect()
    }

    // == Length ==
    /// Returns the number of registered caches.
    pub fn len(&self) -> usize {
        self.caches.read().len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.caches.read().is_empty()
    }
}

impl<V> Default for CacheRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Global Registry ==
/// Process-wide default registry, created on first use and never torn down.
///
/// Values are JSON so heterogeneous callers can share the one registry; each
/// caller isolates itself under its own name via `create`.
static GLOBAL_CACHE_REGISTRY: Lazy<CacheRegistry<Value>> = Lazy::new(CacheRegistry::new);

/// Returns the process-wide cache registry.
///
/// Tests sharing this registry should reset it by iterating
/// [`CacheRegistry::list`] and deleting every name they registered, rather
/// than assuming a fresh instance.
pub fn global_cache_registry() -> &'static CacheRegistry<Value> {
    &GLOBAL_CACHE_REGISTRY
}
