//! Settings endpoints

use axum::Json;

use crate::error::Result;
use crate::models::{QuizSettings, SettingsInput};

/// POST /api/settings/validate
pub async fn validate(Json(input): Json<SettingsInput>) -> Result<Json<QuizSettings>> {
    let settings = input.validate()?;
    Ok(Json(settings))
}
