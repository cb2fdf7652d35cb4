//! Quiz endpoints
//!
//! The server keeps no quiz state: every request carries the session and
//! every response returns the updated one.

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/quiz/start
pub async fn start(Json(request): Json<StartQuizRequest>) -> Result<Json<QuizSession>> {
    let settings = request.settings.validate()?;
    let session = QuizSession::start(&request.deck, settings, &mut rand::thread_rng())?;

    tracing::info!(
        deck = %session.deck_name,
        cards = session.cards.len(),
        tries = settings.tries,
        strictness = settings.strictness.value(),
        "Started quiz"
    );

    Ok(Json(session))
}

/// POST /api/quiz/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>> {
    check_session(&request.session)?;

    let (session, feedback) = request.session.submit(&state.grader, &request.answer);

    Ok(Json(SubmitAnswerResponse {
        finished: session.is_finished(),
        session,
        feedback,
    }))
}

/// POST /api/quiz/hint
pub async fn hint(Json(request): Json<SessionRequest>) -> Result<Json<HintResponse>> {
    check_session(&request.session)?;
    Ok(Json(HintResponse {
        hint: request.session.hint(),
    }))
}

/// POST /api/quiz/skip
pub async fn skip(Json(request): Json<SessionRequest>) -> Result<Json<SkipResponse>> {
    check_session(&request.session)?;
    let session = request.session.skip();

    Ok(Json(SkipResponse {
        finished: session.is_finished(),
        session,
    }))
}

/// POST /api/quiz/finish
pub async fn finish(Json(request): Json<FinishQuizRequest>) -> Result<Json<FinishQuizResponse>> {
    check_session(&request.session)?;

    let summary = request.session.finish()?;
    let mut progress = request.progress;
    progress.record(&summary);

    tracing::info!(
        deck = %summary.deck_name,
        correct = summary.correct,
        total = summary.total,
        "Finished quiz"
    );

    Ok(Json(FinishQuizResponse { summary, progress }))
}

/// Reject sessions no sequence of quiz calls could have produced.
fn check_session(session: &QuizSession) -> Result<()> {
    if session.settings.tries < 1 {
        return Err(ApiError::BadRequest(
            "session allows no tries per card".to_string(),
        ));
    }
    if session.tries_left > session.settings.tries
        || (!session.is_finished() && session.tries_left == 0)
    {
        return Err(ApiError::BadRequest(format!(
            "session has {} tries left of {}",
            session.tries_left, session.settings.tries
        )));
    }
    if session.current > session.cards.len() {
        return Err(ApiError::BadRequest(format!(
            "session is at card {} of {}",
            session.current,
            session.cards.len()
        )));
    }
    let answered = u32::try_from(session.current).unwrap_or(u32::MAX);
    if session.correct > answered {
        return Err(ApiError::BadRequest(format!(
            "session counts {} correct answers after {} cards",
            session.correct, session.current
        )));
    }
    Ok(())
}
