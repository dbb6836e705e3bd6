//! Key Derivation Module
//!
//! Deterministic natural keys for comparison payloads, as an alternative
//! to random identifiers.

use crate::error::{CompareError, Result};

// == Key Separator ==
/// Separator between `lang:title` segments of a derived key.
const KEY_SEPARATOR: &str = ":";

// == Derive Key ==
/// Derives a cache key from paired language codes and article titles.
///
/// Pairs are matched positionally (`lang_codes[i]` with `titles[i]`),
/// sorted by language code, and joined as `lang:title` segments. The same
/// set of pairs therefore yields the same key regardless of the order the
/// caller supplied them in.
///
/// Pure function: it never touches cache state.
///
/// # Errors
/// Returns `CompareError::InvalidArgument` if the slices differ in length.
pub fn derive_key<S: AsRef<str>>(lang_codes: &[S], titles: &[S]) -> Result<String> {
    if lang_codes.len() != titles.len() {
        return Err(CompareError::InvalidArgument(
            "lang_codes and titles must have the same length".to_string(),
        ));
    }

    let mut pairs: Vec<(&str, &str)> = lang_codes
        .iter()
        .zip(titles.iter())
        .map(|(lang, title)| (lang.as_ref(), title.as_ref()))
        .collect();
    pairs.sort();

    let segments: Vec<String> = pairs
        .iter()
        .map(|(lang, title)| format!("{}:{}", lang, title))
        .collect();

    Ok(segments.join(KEY_SEPARATOR))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_sorts_by_language() {
        let key = derive_key(&["fr", "en"], &["Chat", "Cat"]).unwrap();
        assert_eq!(key, "en:Cat:fr:Chat");
    }

    #[test]
    fn test_derive_key_order_independent() {
        let forward = derive_key(&["en", "fr"], &["Cat", "Chat"]).unwrap();
        let reversed = derive_key(&["fr", "en"], &["Chat", "Cat"]).unwrap();

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_derive_key_distinguishes_pair_sets() {
        let two = derive_key(&["en", "fr"], &["Cat", "Chat"]).unwrap();
        let one = derive_key(&["en"], &["Cat"]).unwrap();

        assert_ne!(two, one);
    }

    #[test]
    fn test_derive_key_length_mismatch() {
        let result = derive_key(&["en"], &["a", "b"]);

        assert!(matches!(result, Err(CompareError::InvalidArgument(_))));
    }

    #[test]
    fn test_derive_key_empty_input() {
        let key = derive_key::<&str>(&[], &[]).unwrap();
        assert_eq!(key, "");
    }

    #[test]
    fn test_derive_key_same_language_sorted_by_title() {
        let a = derive_key(&["en", "en"], &["Zebra", "Cat"]).unwrap();
        let b = derive_key(&["en", "en"], &["Cat", "Zebra"]).unwrap();

        assert_eq!(a, b);
        assert_eq!(a, "en:Cat:en:Zebra");
    }
}
