//! Comparison Service
//!
//! The compare / show-comparison flow: fetches the selected language
//! versions through the content provider, stashes the assembled payload
//! in the shared comparison cache under a fresh random identifier, and
//! serves it back to the follow-up request by that identifier.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cache::{Clock, ExpiringLruCache, SystemClock};
use crate::config::Config;
use crate::error::{CompareError, Result};
use crate::models::{ArticleVersion, Comparison, LanguageLink, SearchHit, Selection};
use crate::providers::{ContentProvider, LanguageLinksProvider, SearchProvider};

// == Type Aliases ==
/// The cache specialised to comparison payloads.
pub type ComparisonCache<C = SystemClock> = ExpiringLruCache<Comparison, C>;

/// Shared handle to the process-wide comparison cache.
///
/// Every cache operation runs under the write lock, so the mapping,
/// recency order and size bound are never observed half-updated.
pub type SharedCache<C = SystemClock> = Arc<RwLock<ComparisonCache<C>>>;

// == Comparison Service ==
/// Owns the provider handles and the shared comparison cache.
///
/// One instance lives for the whole process; request handlers hold clones
/// of the shared cache through it.
pub struct ComparisonService<C: Clock = SystemClock> {
    /// Free-text article search
    search: Arc<dyn SearchProvider>,
    /// Equivalent-article lookup across language editions
    langlinks: Arc<dyn LanguageLinksProvider>,
    /// Plain-text article extraction
    content: Arc<dyn ContentProvider>,
    /// Comparison payloads between the compare and show-comparison requests
    cache: SharedCache<C>,
    /// Minimum extracted-text length for a version to count as usable
    min_extract_len: usize,
}

impl ComparisonService<SystemClock> {
    /// Creates a service with a fresh cache built from configuration.
    pub fn from_config(
        config: &Config,
        search: Arc<dyn SearchProvider>,
        langlinks: Arc<dyn LanguageLinksProvider>,
        content: Arc<dyn ContentProvider>,
    ) -> Self {
        let cache = Arc::new(RwLock::new(ExpiringLruCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        )));
        Self::new(config, cache, search, langlinks, content)
    }
}

impl<C: Clock> ComparisonService<C> {
    /// Creates a service around an existing shared cache.
    ///
    /// The composition root owns the cache instance and hands the same
    /// handle to every component that needs it.
    pub fn new(
        config: &Config,
        cache: SharedCache<C>,
        search: Arc<dyn SearchProvider>,
        langlinks: Arc<dyn LanguageLinksProvider>,
        content: Arc<dyn ContentProvider>,
    ) -> Self {
        Self {
            search,
            langlinks,
            content,
            cache,
            min_extract_len: config.min_extract_len,
        }
    }

    // == Search ==
    /// Searches one language edition for candidate articles.
    ///
    /// An empty query short-circuits to no results without touching the
    /// provider.
    pub async fn search(&self, query: &str, lang: &str) -> Result<Vec<SearchHit>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        info!(query, lang, "searching articles");
        self.search.search(query, lang).await
    }

    // == Language Links ==
    /// Lists the language editions an article is available in.
    pub async fn language_links(&self, lang: &str, title: &str) -> Result<Vec<LanguageLink>> {
        info!(lang, title, "listing language editions");
        self.langlinks.language_links(lang, title).await
    }

    // == Compare ==
    /// Fetches the selected language versions and caches the comparison.
    ///
    /// Versions whose extraction fails, or whose text is shorter than the
    /// configured minimum, are skipped with a warning recorded on the
    /// payload. At least two selections must be supplied and at least two
    /// versions must be usable.
    ///
    /// Returns the identifier the comparison was cached under. Each call
    /// gets a fresh random identifier, so independent comparisons never
    /// contend on the same key.
    pub async fn compare(&self, selections: &[Selection]) -> Result<String> {
        if selections.len() < 2 {
            return Err(CompareError::InvalidArgument(
                "Select at least two languages to compare".to_string(),
            ));
        }

        let mut contents: BTreeMap<String, ArticleVersion> = BTreeMap::new();
        let mut warnings = Vec::new();

        for selection in selections {
            info!(lang = %selection.lang, title = %selection.title, "fetching article version");

            match self.content.extract(&selection.lang, &selection.title).await {
                Ok(text) if text.trim().len() >= self.min_extract_len => {
                    contents.insert(
                        selection.lang.clone(),
                        ArticleVersion {
                            lang: selection.lang.clone(),
                            title: selection.title.clone(),
                            content: text,
                        },
                    );
                }
                Ok(_) => {
                    warn!(lang = %selection.lang, title = %selection.title, "extract too short, skipping version");
                    warnings.push(format!(
                        "No usable content for '{}' ({})",
                        selection.title,
                        selection.lang.to_uppercase()
                    ));
                }
                Err(err) => {
                    warn!(lang = %selection.lang, title = %selection.title, error = %err, "extract failed, skipping version");
                    warnings.push(format!(
                        "Failed to fetch '{}' ({}): {}",
                        selection.title,
                        selection.lang.to_uppercase(),
                        err
                    ));
                }
            }
        }

        if contents.len() < 2 {
            return Err(CompareError::NotEnoughContent {
                requested: selections.len(),
                usable: contents.len(),
            });
        }

        let id = Uuid::new_v4().to_string();
        let comparison = Comparison::new(contents, warnings);

        self.cache.write().await.set(id.clone(), comparison);
        info!(id = %id, "comparison cached");

        Ok(id)
    }

    // == Comparison ==
    /// Retrieves a cached comparison by identifier.
    ///
    /// Returns None when the identifier is unknown or the comparison has
    /// expired; callers show a "comparison expired or not found" outcome
    /// and invite a retry.
    pub async fn comparison(&self, id: &str) -> Option<Comparison> {
        let result = self.cache.write().await.get(id);
        if result.is_none() {
            info!(id = %id, "comparison expired or not found");
        }
        result
    }

    // == Discard ==
    /// Drops a cached comparison before its TTL; no-op if already gone.
    pub async fn discard(&self, id: &str) -> bool {
        self.cache.write().await.delete(id)
    }

    // == Cache Handle ==
    /// Returns the shared cache handle.
    pub fn cache(&self) -> &SharedCache<C> {
        &self.cache
    }
}
