//! Readability assessment via a normalized Flesch Reading Ease index

use crate::tokenize;

/// Readability-index capability.
///
/// Returns the raw index for a text, roughly in [0,100] but allowed to
/// exceed either end. `None` means the index cannot be computed for this
/// input (empty text, no sentences); the assessor treats that as an
/// undefined sub-score rather than an error.
pub trait ReadabilityIndex: Send + Sync {
    fn raw_score(&self, text: &str) -> Option<f64>;
}

/// Flesch Reading Ease with heuristic syllable counting.
pub struct FleschReadingEase;

impl FleschReadingEase {
    /// Vowel-group syllable heuristic with a silent-e adjustment.
    fn syllables(word: &str) -> usize {
        let letters: Vec<char> = word
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        if letters.is_empty() {
            // Numeric and symbol tokens count as one spoken unit
            return 1;
        }

        let is_vowel = |c: char| "aeiouy".contains(c);
        let mut count = 0;
        let mut prev_was_vowel = false;
        for &c in &letters {
            let vowel = is_vowel(c);
            if vowel && !prev_was_vowel {
                count += 1;
            }
            prev_was_vowel = vowel;
        }

        // Trailing silent 'e' ("make", "note") unless it is the only vowel
        if count > 1 && letters.len() > 2 && letters.ends_with(&['e']) && !letters.ends_with(&['l', 'e'])
        {
            count -= 1;
        }

        count.max(1)
    }
}

impl ReadabilityIndex for FleschReadingEase {
    fn raw_score(&self, text: &str) -> Option<f64> {
        let words = tokenize::words(text);
        if words.is_empty() {
            return None;
        }
        let sentences = tokenize::sentences(text);
        if sentences.is_empty() {
            return None;
        }

        let n_words = words.len() as f64;
        let n_sentences = sentences.len() as f64;
        let n_syllables: usize = words.iter().map(|w| Self::syllables(w)).sum();

        Some(206.835 - 1.015 * (n_words / n_sentences) - 84.6 * (n_syllables as f64 / n_words))
    }
}

/// Normalized, clamped readability score.
///
/// The raw index is divided by 100 and clamped to exactly 1.0 when the
/// normalized value is ≥ 1.0 and to exactly 0.0 when it is ≤ 0.0. The
/// normalized value is returned on every path, including the in-range
/// one. Returns `None` when the index cannot be computed.
pub fn assess_readability(index: &dyn ReadabilityIndex, text: &str) -> Option<f64> {
    let raw = index.raw_score(text)?;
    let normalized = raw / 100.0;
    if normalized >= 1.0 {
        Some(1.0)
    } else if normalized <= 0.0 {
        Some(0.0)
    } else {
        Some(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIndex(Option<f64>);

    impl ReadabilityIndex for FixedIndex {
        fn raw_score(&self, _text: &str) -> Option<f64> {
            self.0
        }
    }

    #[test]
    fn test_high_raw_score_clamps_to_one() {
        assert_eq!(assess_readability(&FixedIndex(Some(120.0)), "x"), Some(1.0));
        assert_eq!(assess_readability(&FixedIndex(Some(100.0)), "x"), Some(1.0));
    }

    #[test]
    fn test_low_raw_score_clamps_to_zero() {
        assert_eq!(assess_readability(&FixedIndex(Some(-40.0)), "x"), Some(0.0));
        assert_eq!(assess_readability(&FixedIndex(Some(0.0)), "x"), Some(0.0));
    }

    #[test]
    fn test_in_range_score_is_normalized() {
        // The normalized value is returned, never the raw index
        assert_eq!(assess_readability(&FixedIndex(Some(55.0)), "x"), Some(0.55));
    }

    #[test]
    fn test_failed_computation_is_undefined() {
        assert_eq!(assess_readability(&FixedIndex(None), "x"), None);
    }

    #[test]
    fn test_flesch_empty_text_is_undefined() {
        assert_eq!(assess_readability(&FleschReadingEase, ""), None);
    }

    #[test]
    fn test_flesch_simple_text_scores_high() {
        let score = assess_readability(&FleschReadingEase, "The cat sat. The dog ran.").unwrap();
        assert!(score > 0.8, "simple text scored {}", score);
    }

    #[test]
    fn test_flesch_dense_text_scores_lower() {
        let simple = assess_readability(&FleschReadingEase, "The cat sat on the mat.").unwrap();
        let dense = assess_readability(
            &FleschReadingEase,
            "Institutional heterogeneity necessitates comprehensive organizational reconfiguration.",
        )
        .unwrap();
        assert!(dense < simple);
    }

    #[test]
    fn test_syllable_counts() {
        assert_eq!(FleschReadingEase::syllables("cat"), 1);
        assert_eq!(FleschReadingEase::syllables("water"), 2);
        assert_eq!(FleschReadingEase::syllables("make"), 1);
        assert_eq!(FleschReadingEase::syllables("table"), 2);
        assert_eq!(FleschReadingEase::syllables("readability"), 5);
        assert_eq!(FleschReadingEase::syllables("42"), 1);
    }
}
