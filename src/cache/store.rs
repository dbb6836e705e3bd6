//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with recency tracking and
//! lazy TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, Clock, RecencyList, SystemClock};

// == Expiring LRU Cache ==
/// Bounded key/value cache with per-entry TTL and LRU eviction.
///
/// Holds at most `capacity` entries; inserting a new key at capacity
/// evicts the least recently used entry first, so the bound holds at all
/// times. Expired entries are removed lazily by the lookup that finds
/// them; there is no background sweep.
///
/// The value type only needs `Clone`; the clock parameter exists so tests
/// can drive TTL expiry deterministically.
#[derive(Debug)]
pub struct ExpiringLruCache<V, C = SystemClock>
where
    V: Clone,
    C: Clock,
{
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Access-order tracker (least recently used first)
    recency: RecencyList,
    /// Usage counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Maximum entry age before a lookup treats it as absent
    ttl: Duration,
    /// Time source for entry timestamps
    clock: C,
}

impl<V: Clone> ExpiringLruCache<V, SystemClock> {
    // == Constructor ==
    /// Creates a cache with the given capacity and TTL, on the system clock.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(capacity, ttl, SystemClock)
    }
}

impl<V, C> ExpiringLruCache<V, C>
where
    V: Clone,
    C: Clock,
{
    // == Constructor With Clock ==
    /// Creates a cache reading time from the given clock.
    pub fn with_clock(capacity: usize, ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyList::new(),
            stats: CacheStats::new(),
            capacity,
            ttl,
            clock,
        }
    }

    // == Get ==
    /// Retrieves the value stored under `key`, marking it most recently used.
    ///
    /// Returns None for keys that are absent or whose entry has outlived
    /// the TTL; an expired entry is removed as a side effect of the lookup
    /// that discovered it.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now_ms = self.clock.now_ms();

        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(now_ms, self.ttl) {
                self.entries.remove(key);
                self.recency.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            let value = entry.value.clone();
            self.recency.touch(key);
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Set ==
    /// Inserts or overwrites `key` with `value`, stamped with the current time.
    ///
    /// If the cache is at capacity and `key` is new, the least recently
    /// used entry is evicted first. Overwriting an existing key never
    /// triggers eviction. The new entry becomes the most recently used.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        // A zero-capacity cache stores nothing
        if self.capacity == 0 {
            return;
        }

        let key = key.into();
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.recency.pop_lru() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        let now_ms = self.clock.now_ms();
        self.entries.insert(key.clone(), CacheEntry::new(value, now_ms));
        self.recency.touch(&key);

        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes the entry under `key` if present.
    ///
    /// Returns whether an entry was removed; absent keys are a silent no-op.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.recency.remove(key);
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Removes every entry; capacity and TTL are unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of entries the cache holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == TTL ==
    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
