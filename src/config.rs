//! Configuration Module
//!
//! Handles loading and managing library configuration from environment variables.

use std::env;

/// Comparison cache and flow configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of comparisons the cache can hold
    pub cache_capacity: usize,
    /// Seconds a cached comparison stays retrievable
    pub cache_ttl_secs: u64,
    /// Minimum extracted-text length for a language version to count as usable
    pub min_extract_len: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached comparisons (default: 20)
    /// - `CACHE_TTL_SECS` - Comparison TTL in seconds (default: 3600)
    /// - `MIN_EXTRACT_LEN` - Minimum usable extract length (default: 50)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            min_extract_len: env::var("MIN_EXTRACT_LEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 20,
            cache_ttl_secs: 3600,
            min_extract_len: 50,
        }
    }
}
