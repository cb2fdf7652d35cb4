//! Grading endpoint

use axum::{extract::State, Json};

use crate::models::{GradeRequest, GradeResponse};
use crate::AppState;

/// POST /api/grade
pub async fn grade(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Json<GradeResponse> {
    let grade = state
        .grader
        .evaluate(&request.candidate, &request.reference, request.strictness);

    Json(GradeResponse {
        grade,
        strictness: request.strictness,
    })
}
