//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and the TTL check.

use std::time::Duration;

// == Cache Entry ==
/// A stored value together with the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub value: V,
    /// Insertion timestamp (Unix milliseconds, read from the cache clock)
    pub stored_at_ms: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the given clock reading.
    pub fn new(value: V, now_ms: u64) -> Self {
        Self {
            value,
            stored_at_ms: now_ms,
        }
    }

    // == Age ==
    /// Elapsed time since insertion, in milliseconds.
    ///
    /// Saturates at zero if the clock reads earlier than the insertion
    /// time (a manual clock can be shared across caches).
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at_ms)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: expiry uses a strict greater-than comparison
    /// on elapsed time. An entry whose age equals the TTL exactly is
    /// still live; it becomes absent strictly after.
    pub fn is_expired(&self, now_ms: u64, ttl: Duration) -> bool {
        self.age_ms(now_ms) > ttl.as_millis() as u64
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn test_entry_records_insertion_time() {
        let entry = CacheEntry::new("payload", 5_000);

        assert_eq!(entry.value, "payload");
        assert_eq!(entry.stored_at_ms, 5_000);
    }

    #[test]
    fn test_entry_age() {
        let entry = CacheEntry::new((), 5_000);

        assert_eq!(entry.age_ms(5_000), 0);
        assert_eq!(entry.age_ms(7_500), 2_500);
    }

    #[test]
    fn test_entry_age_saturates_on_clock_rewind() {
        let entry = CacheEntry::new((), 5_000);

        assert_eq!(entry.age_ms(1_000), 0);
    }

    #[test]
    fn test_entry_live_before_ttl() {
        let entry = CacheEntry::new((), 0);

        assert!(!entry.is_expired(59_999, TTL));
    }

    #[test]
    fn test_entry_live_at_exact_ttl_boundary() {
        let entry = CacheEntry::new((), 0);

        // Strict greater-than: age == TTL is still live.
        assert!(!entry.is_expired(60_000, TTL));
    }

    #[test]
    fn test_entry_expired_past_ttl() {
        let entry = CacheEntry::new((), 0);

        assert!(entry.is_expired(60_001, TTL));
    }
}
