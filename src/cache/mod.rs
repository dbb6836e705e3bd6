//! Cache Module
//!
//! Bounded in-memory caching with lazy TTL expiration and LRU eviction,
//! plus deterministic key derivation for callers that want natural keys.

mod clock;
mod entry;
mod key;
mod recency;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::derive_key;
pub use recency::RecencyList;
pub use stats::CacheStats;
pub use store::ExpiringLruCache;
