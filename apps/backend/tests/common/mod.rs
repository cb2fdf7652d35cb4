//! Common test utilities and fixtures for integration tests.
//!
//! Builds the real router around a default grader; no external services
//! are needed.

pub mod fixtures;

use axum_test::TestServer;
use quiz_core::{AnswerGrader, GraderConfig};

use flashcard_quiz_backend::{router, AppState};

/// Test server wrapping the full API router.
pub struct TestContext {
    pub server: TestServer,
}

impl TestContext {
    /// Create a test context with the default grading rules.
    pub fn new() -> Self {
        Self::with_config(GraderConfig::default())
    }

    /// Create a test context with custom grading rules.
    ///
    /// # Panics
    /// Panics if the config does not compile.
    pub fn with_config(config: GraderConfig) -> Self {
        let grader = AnswerGrader::new(config).expect("grader config should compile");
        let server = TestServer::new(router(AppState::new(grader)))
            .expect("Failed to start test server");
        Self { server }
    }
}
