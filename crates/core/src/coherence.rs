//! Coherence assessment via adjacent-sentence similarity

use std::collections::HashMap;

use crate::tokenize;

/// Sentence-similarity capability.
///
/// Implementations return a similarity in [0,1] for a pair of sentences;
/// values slightly outside the range are tolerated and clamped by the
/// assessor. An embedding-model backend can be plugged in here.
pub trait SentenceSimilarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Cosine similarity over term-frequency vectors of normalized tokens.
///
/// Lexical overlap is a coarse proxy for semantic similarity, but it is
/// deterministic and needs no model download.
pub struct TermFrequencySimilarity;

impl TermFrequencySimilarity {
    fn term_frequencies(sentence: &str) -> HashMap<String, f64> {
        let mut terms: HashMap<String, f64> = HashMap::new();
        for word in tokenize::words(sentence) {
            let token = tokenize::normalize_token(word);
            if !token.is_empty() {
                *terms.entry(token).or_insert(0.0) += 1.0;
            }
        }
        terms
    }
}

impl SentenceSimilarity for TermFrequencySimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let ta = Self::term_frequencies(a);
        let tb = Self::term_frequencies(b);
        if ta.is_empty() || tb.is_empty() {
            return 0.0;
        }

        let dot: f64 = ta
            .iter()
            .filter_map(|(term, va)| tb.get(term).map(|vb| va * vb))
            .sum();
        let norm_a = ta.values().map(|v| v * v).sum::<f64>().sqrt();
        let norm_b = tb.values().map(|v| v * v).sum::<f64>().sqrt();

        dot / (norm_a * norm_b)
    }
}

/// Mean similarity across all adjacent sentence pairs.
///
/// Each pairwise similarity is clamped into [0,1] before averaging.
/// Returns `None` for texts with fewer than two sentences, since
/// coherence needs something to compare.
pub fn assess_coherence(model: &dyn SentenceSimilarity, text: &str) -> Option<f64> {
    let sentences = tokenize::sentences(text);
    if sentences.len() < 2 {
        return None;
    }

    let total: f64 = sentences
        .windows(2)
        .map(|pair| model.similarity(pair[0], pair[1]).clamp(0.0, 1.0))
        .sum();
    Some(total / (sentences.len() - 1) as f64)
}
