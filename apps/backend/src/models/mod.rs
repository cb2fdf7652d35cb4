//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::{
    AnswerFeedback, Card, Deck, Grade, HintFeedback, Progress, QuizSession, QuizSettings,
    QuizSummary, Strictness,
};

// === Grading ===

/// POST /api/grade request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    pub candidate: String,
    pub reference: String,
    /// Out-of-range values are clamped; missing means the default.
    #[serde(default)]
    pub strictness: Strictness,
}

/// POST /api/grade response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResponse {
    #[serde(flatten)]
    pub grade: Grade,
    pub strictness: Strictness,
}

// === Settings ===

/// A settings field as entered: either a JSON number or raw form text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Number(i64),
    Text(String),
}

impl SettingValue {
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Raw quiz settings input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsInput {
    #[serde(default)]
    pub tries: Option<SettingValue>,
    #[serde(default)]
    pub strictness: Option<SettingValue>,
}

impl SettingsInput {
    /// Validate into quiz settings. Missing fields keep their defaults.
    pub fn validate(&self) -> Result<QuizSettings, quiz_core::ValidationError> {
        let tries = self.tries.as_ref().map(SettingValue::to_text).unwrap_or_default();
        let strictness = self
            .strictness
            .as_ref()
            .map(SettingValue::to_text)
            .unwrap_or_default();
        QuizSettings::parse(&tries, &strictness)
    }
}

// === Quiz ===

/// POST /api/quiz/start request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartQuizRequest {
    pub deck: Deck,
    #[serde(flatten)]
    pub settings: SettingsInput,
}

/// POST /api/quiz/answer request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub session: QuizSession,
    pub answer: String,
}

/// POST /api/quiz/answer response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub session: QuizSession,
    pub feedback: AnswerFeedback,
    pub finished: bool,
}

/// Request carrying only a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub session: QuizSession,
}

/// POST /api/quiz/hint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintResponse {
    pub hint: HintFeedback,
}

/// POST /api/quiz/skip response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkipResponse {
    pub session: QuizSession,
    pub finished: bool,
}

/// POST /api/quiz/finish request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishQuizRequest {
    pub session: QuizSession,
    /// Deck progress before this quiz.
    #[serde(default)]
    pub progress: Progress,
}

/// POST /api/quiz/finish response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishQuizResponse {
    pub summary: QuizSummary,
    pub progress: Progress,
}
