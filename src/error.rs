//! Error types for the comparison library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Compare Error Enum ==
/// Unified error type for the comparison library.
///
/// Cache lookups never produce errors; absent and expired entries are a
/// normal `None` result. The only error originating in the cache layer is
/// `InvalidArgument` from key derivation; the remaining variants belong
/// to the provider contracts and the comparison flow.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Caller supplied malformed input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The article does not exist in the given language edition
    #[error("Article not found: '{title}' ({lang})")]
    ArticleNotFound { lang: String, title: String },

    /// A provider failed to reach its remote service
    #[error("Remote service error: {0}")]
    Remote(String),

    /// Too few language versions yielded usable content to compare
    #[error("Not enough content to compare: {usable} of {requested} versions usable")]
    NotEnoughContent { requested: usize, usable: usize },
}

// == Result Type Alias ==
/// Convenience Result type for the comparison library.
pub type Result<T> = std::result::Result<T, CompareError>;
