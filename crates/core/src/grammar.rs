//! Rule-based grammar assessment
//!
//! A small US-English rule set stands in for a full grammar engine.
//! Each rule flags an issue with a byte span; the score is the fraction
//! of words that did not incur an issue. Heavier backends (e.g. a
//! LanguageTool service) can be plugged in through [`GrammarChecker`].

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::tokenize;

/// A single flagged grammar issue.
#[derive(Debug, Clone)]
pub struct GrammarIssue {
    /// Short rule identifier, e.g. `"repeated-word"`.
    pub rule: &'static str,
    /// Byte span of the offending text.
    pub span: Range<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Grammar-checking capability: returns all flagged issues for a text.
pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> Vec<GrammarIssue>;
}

static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
static SPACE_BEFORE_PUNCT_REGEX: OnceLock<Regex> = OnceLock::new();
static DOUBLED_PUNCT_REGEX: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)?").expect("Failed to compile word regex"))
}

fn space_before_punct_regex() -> &'static Regex {
    SPACE_BEFORE_PUNCT_REGEX
        .get_or_init(|| Regex::new(r"\s[,.;:?!]").expect("Failed to compile punctuation regex"))
}

fn doubled_punct_regex() -> &'static Regex {
    DOUBLED_PUNCT_REGEX
        .get_or_init(|| Regex::new(r"[,;:]{2,}").expect("Failed to compile punctuation regex"))
}

/// Regex-driven US-English grammar checker.
pub struct RuleBasedChecker {
    locale: &'static str,
}

impl RuleBasedChecker {
    /// Checker with the US-English rule set.
    pub fn en_us() -> Self {
        Self { locale: "en-US" }
    }

    /// Locale tag of the active rule set.
    pub fn locale(&self) -> &str {
        self.locale
    }

    /// Immediately repeated word, e.g. "the the".
    fn check_repeated_words(&self, text: &str, issues: &mut Vec<GrammarIssue>) {
        let matches: Vec<_> = word_regex().find_iter(text).collect();
        for pair in matches.windows(2) {
            let (first, second) = (&pair[0], &pair[1]);
            // Only flag when nothing but whitespace separates the pair,
            // so "end. End" across a sentence boundary stays legal.
            let gap = &text[first.end()..second.start()];
            if !gap.is_empty()
                && gap.chars().all(char::is_whitespace)
                && first.as_str().eq_ignore_ascii_case(second.as_str())
            {
                issues.push(GrammarIssue {
                    rule: "repeated-word",
                    span: first.start()..second.end(),
                    message: format!("Repeated word \"{}\"", second.as_str()),
                });
            }
        }
    }

    /// Sentence starting with a lowercase letter.
    fn check_sentence_capitalization(&self, text: &str, issues: &mut Vec<GrammarIssue>) {
        for sentence in tokenize::sentences(text) {
            let offset = sentence.as_ptr() as usize - text.as_ptr() as usize;
            if let Some(first) = sentence.chars().next() {
                if first.is_alphabetic() && first.is_lowercase() {
                    issues.push(GrammarIssue {
                        rule: "sentence-capitalization",
                        span: offset..offset + first.len_utf8(),
                        message: "Sentence does not start with a capital letter".to_string(),
                    });
                }
            }
        }
    }

    /// "a" before a vowel or "an" before a consonant.
    ///
    /// Sound-based exceptions ("an hour", "a university") are not modeled.
    fn check_articles(&self, text: &str, issues: &mut Vec<GrammarIssue>) {
        let matches: Vec<_> = word_regex().find_iter(text).collect();
        for pair in matches.windows(2) {
            let (article, next) = (&pair[0], &pair[1]);
            let next_starts_with_vowel = next
                .as_str()
                .chars()
                .next()
                .map(|c| "aeiou".contains(c.to_ascii_lowercase()))
                .unwrap_or(false);

            let wrong = match article.as_str().to_ascii_lowercase().as_str() {
                "a" => next_starts_with_vowel,
                "an" => !next_starts_with_vowel,
                _ => false,
            };

            if wrong {
                issues.push(GrammarIssue {
                    rule: "article-agreement",
                    span: article.start()..next.end(),
                    message: format!(
                        "\"{}\" does not agree with \"{}\"",
                        article.as_str(),
                        next.as_str()
                    ),
                });
            }
        }
    }

    /// Whitespace before punctuation and doubled separators.
    fn check_punctuation(&self, text: &str, issues: &mut Vec<GrammarIssue>) {
        for m in space_before_punct_regex().find_iter(text) {
            issues.push(GrammarIssue {
                rule: "space-before-punctuation",
                span: m.start()..m.end(),
                message: "Whitespace before punctuation".to_string(),
            });
        }
        for m in doubled_punct_regex().find_iter(text) {
            issues.push(GrammarIssue {
                rule: "doubled-punctuation",
                span: m.start()..m.end(),
                message: "Doubled punctuation mark".to_string(),
            });
        }
    }
}

impl GrammarChecker for RuleBasedChecker {
    fn check(&self, text: &str) -> Vec<GrammarIssue> {
        let mut issues = Vec::new();
        self.check_repeated_words(text, &mut issues);
        self.check_sentence_capitalization(text, &mut issues);
        self.check_articles(text, &mut issues);
        self.check_punctuation(text, &mut issues);
        issues
    }
}

/// Fraction of words free of grammar issues, clamped into [0,1].
///
/// Degenerate texts can produce more issues than words; the raw ratio is
/// clamped at zero so the aggregate contract of [0,1] holds. Returns
/// `None` when the text has no words.
pub fn assess_grammar(checker: &dyn GrammarChecker, text: &str) -> Option<f64> {
    let n_words = tokenize::words(text).len();
    if n_words == 0 {
        return None;
    }
    let n_issues = checker.check(text).len();
    let score = 1.0 - n_issues as f64 / n_words as f64;
    Some(score.max(0.0))
}
