//! Search and language-link types
//!
//! Data returned by the search and language-links providers.

use serde::{Deserialize, Serialize};

/// One candidate article returned by a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Article title
    pub title: String,
    /// Short excerpt around the match
    pub snippet: String,
}

impl SearchHit {
    /// Creates a new SearchHit
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
        }
    }
}

/// An equivalent article in another language edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageLink {
    /// Language code of the edition (e.g. "fr")
    pub lang: String,
    /// Title of the article in that edition
    pub title: String,
}

impl LanguageLink {
    /// Creates a new LanguageLink
    pub fn new(lang: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            title: title.into(),
        }
    }
}
