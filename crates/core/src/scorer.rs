//! The composite scorer and its sample-weight surface

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coherence::{self, SentenceSimilarity, TermFrequencySimilarity};
use crate::grammar::{self, GrammarChecker, RuleBasedChecker};
use crate::readability::{self, FleschReadingEase, ReadabilityIndex};
use crate::spelling::{self, Dictionary, WordListDictionary};

/// Scorer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Weight assigned to examples whose quality could not be assessed
    /// (every sub-score undefined). 1.0 is neutral: the example is
    /// neither boosted nor discarded by the downstream trainer.
    pub undefined_weight: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            undefined_weight: 1.0,
        }
    }
}

/// Per-axis sub-scores plus the aggregate for one text.
///
/// `None` means the axis could not form an opinion on this input
/// (too few tokens or sentences); it is excluded from the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub spelling: Option<f64>,
    pub grammar: Option<f64>,
    pub coherence: Option<f64>,
    pub readability: Option<f64>,
    /// Unweighted mean of the defined sub-scores; `None` iff all four
    /// sub-scores are undefined.
    pub aggregate: Option<f64>,
}

/// Composite lexical quality scorer.
///
/// Holds one shared handle per capability, constructed once and reused
/// across all scoring calls; capability backends are injected with the
/// `with_*` builders.
pub struct LexicalQualityScorer {
    config: ScorerConfig,
    dictionary: Arc<dyn Dictionary>,
    grammar: Arc<dyn GrammarChecker>,
    similarity: Arc<dyn SentenceSimilarity>,
    readability: Arc<dyn ReadabilityIndex>,
}

impl LexicalQualityScorer {
    /// Scorer with the built-in capability backends.
    pub fn new(config: ScorerConfig) -> Self {
        Self {
            config,
            dictionary: Arc::new(WordListDictionary::builtin()),
            grammar: Arc::new(RuleBasedChecker::en_us()),
            similarity: Arc::new(TermFrequencySimilarity),
            readability: Arc::new(FleschReadingEase),
        }
    }

    /// Replace the dictionary backend.
    pub fn with_dictionary(mut self, dictionary: Arc<dyn Dictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Replace the grammar-checking backend.
    pub fn with_grammar_checker(mut self, checker: Arc<dyn GrammarChecker>) -> Self {
        self.grammar = checker;
        self
    }

    /// Replace the sentence-similarity backend.
    pub fn with_similarity(mut self, similarity: Arc<dyn SentenceSimilarity>) -> Self {
        self.similarity = similarity;
        self
    }

    /// Replace the readability-index backend.
    pub fn with_readability(mut self, readability: Arc<dyn ReadabilityIndex>) -> Self {
        self.readability = readability;
        self
    }

    /// Score one text on all four axes.
    pub fn breakdown(&self, text: &str) -> ScoreBreakdown {
        let spelling = spelling::assess_spelling(self.dictionary.as_ref(), text);
        let grammar = grammar::assess_grammar(self.grammar.as_ref(), text);
        let coherence = coherence::assess_coherence(self.similarity.as_ref(), text);
        let readability = readability::assess_readability(self.readability.as_ref(), text);

        let defined: Vec<f64> = [spelling, grammar, coherence, readability]
            .into_iter()
            .flatten()
            .collect();

        let aggregate = if defined.is_empty() {
            debug!("No sub-score defined for text ({} bytes)", text.len());
            None
        } else {
            Some(defined.iter().sum::<f64>() / defined.len() as f64)
        };

        ScoreBreakdown {
            spelling,
            grammar,
            coherence,
            readability,
            aggregate,
        }
    }

    /// Aggregate lexical quality for one text.
    ///
    /// 1.0 means perfect lexical quality, 0.0 entirely incomprehensible.
    /// Spelling, grammar, coherence and readability are equally weighted;
    /// undefined axes are skipped. `None` when no axis could be computed
    /// (e.g. the empty string) — never a panic.
    pub fn assess_text_quality(&self, text: &str) -> Option<f64> {
        self.breakdown(text).aggregate
    }

    /// Vectorized per-example weights for a batch of texts.
    ///
    /// Undefined aggregates map to `config.undefined_weight`. This is the
    /// `sample_weight` array handed to the downstream trainer.
    pub fn sample_weights<S>(&self, texts: &[S]) -> Vec<f64>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| {
                self.assess_text_quality(text.as_ref())
                    .unwrap_or(self.config.undefined_weight)
            })
            .collect()
    }

    /// Active configuration.
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }
}

impl Default for LexicalQualityScorer {
    fn default() -> Self {
        Self::new(ScorerConfig::default())
    }
}
