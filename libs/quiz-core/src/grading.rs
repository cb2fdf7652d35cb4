//! Answer grading for quiz sessions.
//!
//! A typed answer is compared to the card's answer by token overlap
//! (Jaccard similarity over word sets, stop words removed). Answers that
//! contain a year or a date must match exactly.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Strictness used when a session does not configure one.
pub const DEFAULT_STRICTNESS: u8 = 80;

/// Function words ignored when comparing answers.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "of", "in", "to", "for", "on", "and", "by",
];

/// Patterns that mark an answer as a year or date.
pub const DEFAULT_DATE_PATTERNS: &[&str] = &[r"\d{4}", r"\d{2}/\d{2}/\d{4}", r"\d{2}-\d{2}-\d{4}"];

static DEFAULT_GRADER: LazyLock<AnswerGrader> = LazyLock::new(AnswerGrader::default);

/// Minimum similarity percentage (0-100) needed to accept a fuzzy match.
///
/// Any number converts by clamping into range, so deserializing `150`
/// yields 100 and `-3` yields 0. Fractions round up: `66.5` becomes 67.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "StrictnessInput", into = "u8")]
pub struct Strictness(u8);

/// Any JSON number accepted as a strictness.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum StrictnessInput {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<StrictnessInput> for Strictness {
    fn from(input: StrictnessInput) -> Self {
        match input {
            StrictnessInput::Signed(value) => Self::clamped(value),
            StrictnessInput::Unsigned(value) => Self(value.min(100) as u8),
            StrictnessInput::Float(value) if value.is_nan() => Self::MIN,
            StrictnessInput::Float(value) => Self(value.ceil().clamp(0.0, 100.0) as u8),
        }
    }
}

impl Strictness {
    pub const MAX: Self = Self(100);
    pub const MIN: Self = Self(0);

    /// Clamp any integer into 0..=100.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Create from a value already known to be in range.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 100).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Strictness {
    fn default() -> Self {
        Self(DEFAULT_STRICTNESS)
    }
}

impl From<i64> for Strictness {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Strictness> for u8 {
    fn from(strictness: Strictness) -> Self {
        strictness.0
    }
}

/// Tunable grading rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraderConfig {
    pub stop_words: BTreeSet<String>,
    pub date_patterns: Vec<String>,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            date_patterns: DEFAULT_DATE_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Which rule decided a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBasis {
    /// Candidate looked like a year or date and was not an exact match.
    NumericMismatch,
    /// One side had no content words; compared whole strings instead.
    ExactFallback,
    /// Token overlap compared against strictness.
    Similarity,
}

/// Result of grading one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub accepted: bool,
    /// Similarity percentage, absent when the numeric rule rejected early.
    pub score: Option<f64>,
    pub basis: GradeBasis,
}

/// Shared and combined token counts of two answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenOverlap {
    pub shared: usize,
    pub total: usize,
}

impl TokenOverlap {
    pub fn between(a: &HashSet<String>, b: &HashSet<String>) -> Self {
        Self {
            shared: a.intersection(b).count(),
            total: a.union(b).count(),
        }
    }

    /// Jaccard similarity as a percentage.
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.shared as f64 / self.total as f64
    }

    /// `percent() >= strictness`, evaluated in integers.
    pub fn meets(self, strictness: Strictness) -> bool {
        self.shared * 100 >= usize::from(strictness.value()) * self.total
    }
}

/// Grades typed answers against reference answers.
///
/// Stateless after construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct AnswerGrader {
    stop_words: HashSet<String>,
    date_patterns: Vec<Regex>,
}

impl AnswerGrader {
    /// Build a grader, compiling the configured date patterns.
    pub fn new(config: GraderConfig) -> Result<Self, ConfigError> {
        let stop_words = config
            .stop_words
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty())
            .collect();

        let date_patterns = config
            .date_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            stop_words,
            date_patterns,
        })
    }

    /// Accept or reject `candidate` as an answer to a card whose answer is `reference`.
    pub fn grade(&self, candidate: &str, reference: &str, strictness: Strictness) -> bool {
        self.evaluate(candidate, reference, strictness).accepted
    }

    /// Like [`grade`](Self::grade), but also reports the score and deciding rule.
    pub fn evaluate(&self, candidate: &str, reference: &str, strictness: Strictness) -> Grade {
        let candidate = normalize(candidate);
        let reference = normalize(reference);

        let grade = if candidate != reference && self.looks_like_date(&candidate) {
            Grade {
                accepted: false,
                score: None,
                basis: GradeBasis::NumericMismatch,
            }
        } else {
            let candidate_tokens = self.content_tokens(&candidate);
            let reference_tokens = self.content_tokens(&reference);

            if candidate_tokens.is_empty() || reference_tokens.is_empty() {
                let accepted = candidate == reference;
                Grade {
                    accepted,
                    score: Some(if accepted { 100.0 } else { 0.0 }),
                    basis: GradeBasis::ExactFallback,
                }
            } else {
                let overlap = TokenOverlap::between(&candidate_tokens, &reference_tokens);
                Grade {
                    accepted: overlap.meets(strictness),
                    score: Some(overlap.percent()),
                    basis: GradeBasis::Similarity,
                }
            }
        };

        tracing::trace!(
            accepted = grade.accepted,
            score = ?grade.score,
            basis = ?grade.basis,
            strictness = strictness.value(),
            "graded answer"
        );
        grade
    }

    /// Whether any date pattern occurs in the (normalized) text.
    pub fn looks_like_date(&self, text: &str) -> bool {
        self.date_patterns.iter().any(|p| p.is_match(text))
    }

    /// Word tokens of normalized text with stop words removed.
    pub fn content_tokens(&self, text: &str) -> HashSet<String> {
        tokenize(text)
            .filter(|t| !self.stop_words.contains(*t))
            .map(str::to_string)
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for AnswerGrader {
    fn default() -> Self {
        Self::new(GraderConfig::default()).expect("default date patterns compile")
    }
}

/// Grade with the default configuration, clamping `strictness` into 0..=100.
pub fn grade(candidate: &str, reference: &str, strictness: i64) -> bool {
    DEFAULT_GRADER.grade(candidate, reference, Strictness::clamped(strictness))
}

/// Trim and lowercase.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Maximal runs of alphanumeric or underscore characters.
pub fn tokenize(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
}
