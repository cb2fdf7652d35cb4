//! Quiz settings and their validation.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::grading::Strictness;

/// Attempts allowed per card when a session does not configure them.
pub const DEFAULT_TRIES: u32 = 1;

/// Per-session quiz settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    pub tries: u32,
    pub strictness: Strictness,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            tries: DEFAULT_TRIES,
            strictness: Strictness::default(),
        }
    }
}

impl QuizSettings {
    /// Validate numeric settings.
    pub fn new(tries: i64, strictness: i64) -> Result<Self, ValidationError> {
        if tries < 1 {
            return Err(ValidationError::TriesBelowMinimum { value: tries });
        }
        if !(0..=100).contains(&strictness) {
            return Err(ValidationError::StrictnessOutOfRange { value: strictness });
        }

        Ok(Self {
            tries: u32::try_from(tries).unwrap_or(u32::MAX),
            strictness: Strictness::clamped(strictness),
        })
    }

    /// Parse settings as typed into a form.
    ///
    /// A blank field keeps that field's default.
    pub fn parse(tries: &str, strictness: &str) -> Result<Self, ValidationError> {
        let defaults = Self::default();

        let tries = match tries.trim() {
            "" => i64::from(defaults.tries),
            raw => raw
                .parse::<i64>()
                .map_err(|_| ValidationError::TriesNotANumber {
                    value: raw.to_string(),
                })?,
        };

        let strictness = match strictness.trim() {
            "" => i64::from(defaults.strictness.value()),
            raw => raw
                .parse::<i64>()
                .map_err(|_| ValidationError::StrictnessNotANumber {
                    value: raw.to_string(),
                })?,
        };

        Self::new(tries, strictness)
    }
}
