pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use quiz_core::AnswerGrader;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub grader: Arc<AnswerGrader>,
}

impl AppState {
    pub fn new(grader: AnswerGrader) -> Self {
        Self {
            grader: Arc::new(grader),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/grade", post(routes::grade::grade))
        .route("/api/settings/validate", post(routes::settings::validate))
        .route("/api/quiz/start", post(routes::quiz::start))
        .route("/api/quiz/answer", post(routes::quiz::answer))
        .route("/api/quiz/hint", post(routes::quiz::hint))
        .route("/api/quiz/skip", post(routes::quiz::skip))
        .route("/api/quiz/finish", post(routes::quiz::finish))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Compiling grading rules...");
    let grader = AnswerGrader::new(config.grader.clone())?;

    let app = router(AppState::new(grader));

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
