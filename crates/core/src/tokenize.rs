//! Word and sentence segmentation shared by the sub-assessors
//!
//! Words are whitespace-delimited tokens. Sentences are split on runs of
//! terminal punctuation; trailing text without a terminator still counts
//! as a sentence. Abbreviations ("Mr.", "e.g.") are not special-cased.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static SENTENCE_BOUNDARY_REGEX: OnceLock<Regex> = OnceLock::new();

fn sentence_boundary_regex() -> &'static Regex {
    SENTENCE_BOUNDARY_REGEX.get_or_init(|| {
        Regex::new(r"[.!?]+\s+|[.!?]+$").expect("Failed to compile sentence boundary regex")
    })
}

/// Split text into whitespace-delimited word tokens.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into trimmed, non-empty sentence slices.
///
/// The returned slices borrow from `text`, so byte offsets into the
/// original string can be recovered from them.
pub fn sentences(text: &str) -> Vec<&str> {
    sentence_boundary_regex()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Normalize a token for dictionary lookup.
///
/// Applies NFKD folding with combining marks dropped ("café" → "cafe"),
/// strips surrounding punctuation, and lowercases. May return an empty
/// string for punctuation-only tokens.
pub fn normalize_token(token: &str) -> String {
    let folded: String = token.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    folded
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_split() {
        assert_eq!(words("the quick  brown\tfox"), vec!["the", "quick", "brown", "fox"]);
        assert!(words("").is_empty());
        assert!(words("   \t\n").is_empty());
    }

    #[test]
    fn test_sentence_split() {
        let text = "First sentence. Second one! Is this the third? Yes.";
        let sents = sentences(text);
        assert_eq!(
            sents,
            vec!["First sentence", "Second one", "Is this the third", "Yes"]
        );
    }

    #[test]
    fn test_sentence_without_terminator() {
        assert_eq!(sentences("no terminal punctuation here"), vec!["no terminal punctuation here"]);
    }

    #[test]
    fn test_sentence_split_empty() {
        assert!(sentences("").is_empty());
        assert!(sentences("...").is_empty());
    }

    #[test]
    fn test_sentence_ellipsis_collapses() {
        // Runs of terminators form a single boundary
        assert_eq!(sentences("Wait... what?!"), vec!["Wait", "what"]);
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("Hello,"), "hello");
        assert_eq!(normalize_token("(world)"), "world");
        assert_eq!(normalize_token("Café"), "cafe");
        assert_eq!(normalize_token("don't"), "don't");
        assert_eq!(normalize_token("---"), "");
    }

    #[test]
    fn test_sentence_slices_borrow_from_input() {
        let text = "One. two here.";
        let sents = sentences(text);
        let offset = sents[1].as_ptr() as usize - text.as_ptr() as usize;
        assert_eq!(&text[offset..offset + sents[1].len()], "two here");
    }
}
