//! Spelling assessment against a pluggable dictionary

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::tokenize;

/// Dictionary capability: classifies a normalized token as known or unknown.
///
/// Implementations receive tokens already passed through
/// [`tokenize::normalize_token`] (lowercased, punctuation-trimmed).
pub trait Dictionary: Send + Sync {
    fn is_known(&self, word: &str) -> bool;
}

/// In-memory word-list dictionary.
///
/// Backed by a `HashSet` of lowercase words. Ships with an embedded
/// common-English list; larger corpora (e.g. `/usr/share/dict/words`)
/// can be loaded with [`WordListDictionary::from_file`].
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Dictionary backed by the embedded common-English word list.
    pub fn builtin() -> Self {
        Self::from_words(include_str!("../data/words_en.txt").lines())
    }

    /// Build a dictionary from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a word-per-line dictionary file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Dictionary(format!("failed to read {}: {}", path.display(), e))
        })?;
        let dict = Self::from_words(content.lines());
        if dict.is_empty() {
            return Err(Error::Dictionary(format!(
                "no words found in {}",
                path.display()
            )));
        }
        debug!("Loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_known(&self, word: &str) -> bool {
        // Numbers are not spelling mistakes
        if word.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }
        self.words.contains(word)
    }
}

/// Fraction of tokens the dictionary recognizes.
///
/// Tokens are whitespace-delimited and normalized before lookup;
/// punctuation-only tokens are ignored. Returns `None` when the text
/// yields no tokens at all.
pub fn assess_spelling(dictionary: &dyn Dictionary, text: &str) -> Option<f64> {
    let tokens: Vec<String> = tokenize::words(text)
        .iter()
        .map(|w| tokenize::normalize_token(w))
        .filter(|w| !w.is_empty())
        .collect();

    if tokens.is_empty() {
        return None;
    }

    let unknown = tokens.iter().filter(|t| !dictionary.is_known(t)).count();
    Some(1.0 - unknown as f64 / tokens.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_words_known() {
        let dict = WordListDictionary::from_words(["the", "cat", "sat"]);
        assert_eq!(assess_spelling(&dict, "The cat sat."), Some(1.0));
    }

    #[test]
    fn test_partial_misspelling() {
        let dict = WordListDictionary::from_words(["the", "cat", "sat"]);
        // "zxqv" is the one unknown token out of four
        let score = assess_spelling(&dict, "the cat sat zxqv").unwrap();
        assert!((score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_empty_text_is_undefined() {
        let dict = WordListDictionary::from_words(["anything"]);
        assert_eq!(assess_spelling(&dict, ""), None);
        assert_eq!(assess_spelling(&dict, "   \t  "), None);
    }

    #[test]
    fn test_punctuation_only_is_undefined() {
        let dict = WordListDictionary::from_words(["anything"]);
        assert_eq!(assess_spelling(&dict, "-- ... !!!"), None);
    }

    #[test]
    fn test_numbers_count_as_known() {
        let dict = WordListDictionary::from_words(["amount"]);
        assert_eq!(assess_spelling(&dict, "amount 12345"), Some(1.0));
    }

    #[test]
    fn test_score_in_unit_range() {
        let dict = WordListDictionary::builtin();
        let score = assess_spelling(&dict, "the weather is nice today").unwrap();
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_builtin_dictionary_nonempty() {
        let dict = WordListDictionary::builtin();
        assert!(!dict.is_empty());
        assert!(dict.is_known("the"));
        assert!(!dict.is_known("zzxyqj"));
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = WordListDictionary::from_file("/nonexistent/words.txt");
        assert!(err.is_err());
    }
}
