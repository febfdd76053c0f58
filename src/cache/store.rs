//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL
//! expiration. Expiration is lazy: expired entries are dropped when a lookup
//! observes them or when [`BoundedCache::cleanup`] sweeps them.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheAnalytics, CacheEntry, LruTracker};
use crate::config::CacheConfig;
use crate::models::{AnalyticsSnapshot, CacheStateSnapshot, CleanupSummary, ConfigSnapshot, StateSnapshot};

// == Bounded Cache ==
/// A fixed-capacity key-value cache with LRU eviction and TTL expiration.
///
/// Values are opaque to the cache. All operations run to completion without
/// blocking; instances are not internally synchronized — share one through
/// [`SharedCache`](crate::registry::SharedCache) for concurrent access.
#[derive(Debug)]
pub struct BoundedCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Usage counters
    analytics: CacheAnalytics,
    /// Active configuration
    config: CacheConfig,
}

impl<V> BoundedCache<V> {
    // == Constructor ==
    /// Creates a new BoundedCache with the given configuration.
    ///
    /// Capacity is a positive entry count; a configured `max_size` of zero
    /// is raised to one.
    pub fn new(mut config: CacheConfig) -> Self {
        config.max_size = config.max_size.max(1);
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            analytics: CacheAnalytics::new(),
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is overwritten and the TTL clock
    /// is reset. If inserting a new key would exceed capacity, the least
    /// recently used entry is evicted first. Either way the key becomes the
    /// most recently used and the set counter increments. Never fails.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let is_overwrite = self.entries.contains_key(&key);

        // If not overwriting and at capacity, evict the LRU entry
        if !is_overwrite && self.entries.len() >= self.config.max_size {
            if let Some(victim) = self.lru.evict_oldest() {
                self.entries.remove(&victim);
                if self.config.enable_analytics {
                    self.analytics.record_eviction();
                }
                debug!(key = %victim, "evicted least recently used entry");
            }
        }

        let entry = CacheEntry::new(value, self.config.ttl);
        self.entries.insert(key.clone(), entry);
        self.lru.touch(&key);

        if self.config.enable_analytics {
            self.analytics.record_set();
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// On a hit the entry becomes the most recently used and the hit counter
    /// increments. A missing or expired key counts as a miss; an expired
    /// entry observed here is removed as a side effect (this removal is not
    /// an eviction).
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                if self.config.enable_analytics {
                    self.analytics.record_miss();
                }
                return None;
            }
        };

        if expired {
            self.remove_expired(key);
            if self.config.enable_analytics {
                self.analytics.record_miss();
            }
            return None;
        }

        self.lru.touch(key);
        if self.config.enable_analytics {
            self.analytics.record_hit();
        }
        let entry = self.entries.get_mut(key)?;
        entry.touch();
        Some(&entry.value)
    }

    // == Has ==
    /// Checks whether a key is present and not expired.
    ///
    /// A peek, not an access: recency order and hit/miss counters are left
    /// untouched. An expired entry observed here is still removed, so it
    /// stops occupying capacity.
    pub fn has(&mut self, key: &str) -> bool {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => return false,
        };

        if expired {
            self.remove_expired(key);
            return false;
        }
        true
    }

    // == Delete ==
    /// Removes an entry by key, returning whether a removal occurred.
    ///
    /// The delete counter increments only on actual removal.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            if self.config.enable_analytics {
                self.analytics.record_delete();
            }
            true
        } else {
            false
        }
    }

    // == Size ==
    /// Returns the number of tracked entries.
    ///
    /// Entries whose expiry has not yet been observed by a lookup or a
    /// cleanup pass still count.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache tracks no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Keys ==
    /// Returns a snapshot of tracked keys, unordered.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Values ==
    /// Returns a snapshot of tracked values, unordered.
    pub fn values(&self) -> Vec<&V> {
        self.entries.values().map(|entry| &entry.value).collect()
    }

    // == Entries ==
    /// Returns a snapshot of tracked key-value pairs, unordered.
    pub fn entries(&self) -> Vec<(&str, &V)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), &entry.value))
            .collect()
    }

    // == Analytics ==
    /// Returns the current analytics counters with the derived hit rate.
    pub fn analytics(&self) -> AnalyticsSnapshot {
        self.analytics.snapshot()
    }

    // == Export State ==
    /// Returns a debug snapshot: configuration, entry population and
    /// analytics, stamped with the capture time.
    pub fn export_state(&self) -> CacheStateSnapshot {
        CacheStateSnapshot {
            config: ConfigSnapshot {
                max_size: self.config.max_size,
                ttl_ms: self.config.ttl_ms(),
            },
            state: StateSnapshot {
                size: self.size(),
                keys: self.keys(),
            },
            analytics: self.analytics(),
            captured_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    // == Cleanup ==
    /// Removes all expired entries; with `force`, removes every entry.
    ///
    /// Removals here touch no counters — a sweep is bookkeeping, not an
    /// observable cache operation.
    pub fn cleanup(&mut self, force: bool) -> CleanupSummary {
        let size_before = self.entries.len();

        if force {
            self.entries.clear();
            self.lru.clear();
        } else {
            let expired_keys: Vec<String> = self
                .entries
                .iter()
                .filter(|(_, entry)| entry.is_expired())
                .map(|(key, _)| key.clone())
                .collect();

            for key in expired_keys {
                self.entries.remove(&key);
                self.lru.remove(&key);
            }
        }

        let size_after = self.entries.len();
        if size_after < size_before {
            debug!(removed = size_before - size_after, force, "cleanup removed entries");
        }

        CleanupSummary {
            cleaned: size_after < size_before,
            size_before,
            size_after,
        }
    }

    // == Clear ==
    /// Unconditionally empties the cache. Analytics counters survive.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
    }

    /// Drops an entry observed expired during a lookup.
    fn remove_expired(&mut self, key: &str) {
        self.entries.remove(key);
        self.lru.remove(key);
        debug!(key, "removed expired entry");
    }
}

impl<V> Default for BoundedCache<V> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
