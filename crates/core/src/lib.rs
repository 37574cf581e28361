//! Composite lexical quality scoring for text datasets
//!
//! This crate scores a text sample on four independent axes:
//! - Spelling (fraction of dictionary-recognized tokens)
//! - Grammar (fraction of words free of rule-based issues)
//! - Coherence (mean adjacent-sentence similarity)
//! - Readability (normalized Flesch Reading Ease)
//!
//! Each axis can independently report "undefined" for degenerate input;
//! the aggregate is the unweighted mean of whichever axes succeeded.
//! The aggregate feeds downstream training pipelines as a per-example
//! sample weight.

pub mod coherence;
pub mod error;
pub mod grammar;
pub mod readability;
pub mod scorer;
pub mod spelling;
pub mod tokenize;

pub use coherence::{SentenceSimilarity, TermFrequencySimilarity};
pub use error::{Error, Result};
pub use grammar::{GrammarChecker, GrammarIssue, RuleBasedChecker};
pub use readability::{FleschReadingEase, ReadabilityIndex};
pub use scorer::{LexicalQualityScorer, ScoreBreakdown, ScorerConfig};
pub use spelling::{Dictionary, WordListDictionary};
