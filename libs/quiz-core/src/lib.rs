//! Core quiz library for the flashcard app.
//!
//! Provides:
//! - Answer grading for typed quiz answers (token overlap with a strict date rule)
//! - Quiz settings validation
//! - Quiz and study session values
//! - Shared types (Card, Deck, Progress)

pub mod error;
pub mod grading;
pub mod session;
pub mod settings;
pub mod types;

pub use error::{CardError, ConfigError, SessionError, ValidationError};
pub use grading::{grade, AnswerGrader, Grade, GradeBasis, GraderConfig, Strictness};
pub use session::{AnswerFeedback, HintFeedback, QuizSession, QuizSummary, StudySession};
pub use settings::QuizSettings;
pub use types::{Card, Deck, Progress};
