//! Provider Traits
//!
//! Contracts for the external encyclopedia collaborators. The host
//! application supplies the concrete implementations (typically HTTP
//! clients against a wiki API); tests use scripted in-memory fakes.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{LanguageLink, SearchHit};

// == Search Provider ==
/// Free-text article search within one language edition.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Returns candidate titles with short snippets, best match first.
    ///
    /// # Errors
    /// `CompareError::Remote` when the backing service cannot be reached;
    /// callers surface that as a non-fatal, user-visible error.
    async fn search(&self, query: &str, lang: &str) -> Result<Vec<SearchHit>>;
}

// == Language Links Provider ==
/// Lookup of equivalent articles in other language editions.
#[async_trait]
pub trait LanguageLinksProvider: Send + Sync {
    /// Returns the (language, title) pairs equivalent to the given article.
    ///
    /// # Errors
    /// `CompareError::ArticleNotFound` when the article does not exist in
    /// the given edition, `CompareError::Remote` on service failures.
    async fn language_links(&self, lang: &str, title: &str) -> Result<Vec<LanguageLink>>;
}

// == Content Provider ==
/// Plain-text extraction of one article version.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Returns the article's extracted plain text.
    ///
    /// An empty (or very short) string is a soft failure: the comparison
    /// flow skips that version with a warning instead of aborting.
    ///
    /// # Errors
    /// `CompareError::Remote` on hard service failures; these are also
    /// downgraded to per-version warnings by the flow.
    async fn extract(&self, lang: &str, title: &str) -> Result<String>;
}
