//! Crosswiki - cross-language article comparison
//!
//! Search an encyclopedia, list an article's language editions, and
//! compare extracted text across languages. Comparison payloads live in a
//! bounded in-memory cache with TTL and LRU eviction between the compare
//! request and the show-comparison request, so large article text never
//! rides in a session cookie.
//!
//! The cache is in-memory only and resets on process restart: an
//! identifier minted by one process instance is unreachable from another,
//! so multi-process deployments need sticky routing or an external store.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod service;

pub use cache::{derive_key, ExpiringLruCache, ManualClock, SystemClock};
pub use config::Config;
pub use error::{CompareError, Result};
pub use service::{ComparisonCache, ComparisonService, SharedCache};
