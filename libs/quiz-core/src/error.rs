//! Error types for quiz-core.
//!
//! Grading itself never fails; these cover the layers around it.

use thiserror::Error;

/// Errors raised while building an [`AnswerGrader`](crate::grading::AnswerGrader).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid date pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Reasons quiz settings input can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("number of tries must be a whole number, got {value:?}")]
    TriesNotANumber { value: String },

    #[error("number of tries must be at least 1, got {value}")]
    TriesBelowMinimum { value: i64 },

    #[error("strictness must be a whole number, got {value:?}")]
    StrictnessNotANumber { value: String },

    #[error("strictness must be between 0 and 100, got {value}")]
    StrictnessOutOfRange { value: i64 },
}

impl ValidationError {
    /// Stable machine-readable name of the failure.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::TriesNotANumber { .. } => "tries_not_a_number",
            Self::TriesBelowMinimum { .. } => "tries_below_minimum",
            Self::StrictnessNotANumber { .. } => "strictness_not_a_number",
            Self::StrictnessOutOfRange { .. } => "strictness_out_of_range",
        }
    }
}

/// Errors from quiz session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("deck {deck:?} has no cards")]
    EmptyDeck { deck: String },

    #[error("quiz still has {remaining} unanswered cards")]
    NotFinished { remaining: usize },
}

/// Errors creating a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card is missing a question")]
    MissingQuestion,

    #[error("card is missing an answer")]
    MissingAnswer,
}
