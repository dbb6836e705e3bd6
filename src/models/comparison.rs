//! Comparison types
//!
//! The per-comparison payload stored in the cache, and the selection
//! inputs the compare flow receives.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CompareError;

/// One language version the caller asked to compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Language code of the edition
    pub lang: String,
    /// Article title in that edition
    pub title: String,
}

impl Selection {
    /// Creates a new Selection
    pub fn new(lang: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            title: title.into(),
        }
    }
}

impl FromStr for Selection {
    type Err = CompareError;

    /// Parses the `lang|title` pair form selection lists arrive in.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('|') {
            Some((lang, title)) if !lang.is_empty() && !title.is_empty() => {
                Ok(Self::new(lang, title))
            }
            _ => Err(CompareError::InvalidArgument(format!(
                "Expected 'lang|title', got '{}'",
                s
            ))),
        }
    }
}

/// Extracted text of one language version of an article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleVersion {
    /// Language code of the edition
    pub lang: String,
    /// Article title in that edition
    pub title: String,
    /// Extracted plain text
    pub content: String,
}

/// The payload cached per comparison: every usable language version plus
/// the warnings collected while assembling them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Usable versions, keyed by language code
    pub contents: BTreeMap<String, ArticleVersion>,
    /// Non-fatal problems hit while fetching (skipped versions)
    pub warnings: Vec<String>,
    /// When the versions were fetched
    pub fetched_at: DateTime<Utc>,
}

impl Comparison {
    /// Creates a comparison fetched now.
    pub fn new(contents: BTreeMap<String, ArticleVersion>, warnings: Vec<String>) -> Self {
        Self {
            contents,
            warnings,
            fetched_at: Utc::now(),
        }
    }

    /// Language codes present in the comparison, in sorted order.
    pub fn langs(&self) -> Vec<&str> {
        self.contents.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_parse() {
        let sel: Selection = "fr|Chat".parse().unwrap();
        assert_eq!(sel, Selection::new("fr", "Chat"));
    }

    #[test]
    fn test_selection_parse_title_containing_separator() {
        let sel: Selection = "en|AC|DC".parse().unwrap();
        assert_eq!(sel.lang, "en");
        assert_eq!(sel.title, "AC|DC");
    }

    #[test]
    fn test_selection_parse_rejects_malformed_input() {
        for input in ["Chat", "|Chat", "fr|", ""] {
            let result = input.parse::<Selection>();
            assert!(
                matches!(result, Err(CompareError::InvalidArgument(_))),
                "'{}' should not parse",
                input
            );
        }
    }

    #[test]
    fn test_comparison_langs_sorted() {
        let mut contents = BTreeMap::new();
        for (lang, title) in [("fr", "Chat"), ("en", "Cat"), ("de", "Katze")] {
            contents.insert(
                lang.to_string(),
                ArticleVersion {
                    lang: lang.to_string(),
                    title: title.to_string(),
                    content: String::new(),
                },
            );
        }

        let comparison = Comparison::new(contents, Vec::new());
        assert_eq!(comparison.langs(), vec!["de", "en", "fr"]);
    }

    #[test]
    fn test_comparison_serialize() {
        let comparison = Comparison::new(BTreeMap::new(), vec!["skipped fr".to_string()]);
        let json = serde_json::to_string(&comparison).unwrap();
        assert!(json.contains("warnings"));
        assert!(json.contains("fetched_at"));
    }
}
