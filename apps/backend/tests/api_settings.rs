//! Settings API tests.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::TestContext;

/// Test form text is parsed into settings.
#[tokio::test]
async fn test_validate_text_settings() {
    let ctx = TestContext::new();
    let response = ctx
        .server
        .post("/api/settings/validate")
        .json(&json!({ "tries": " 3 ", "strictness": "65" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "tries": 3, "strictness": 65 }));
}

/// Test missing fields fall back to defaults.
#[tokio::test]
async fn test_validate_defaults() {
    let ctx = TestContext::new();
    let response = ctx
        .server
        .post("/api/settings/validate")
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "tries": 1, "strictness": 80 }));
}

/// Test each validation failure is reported with its reason.
#[tokio::test]
async fn test_validate_failures() {
    let ctx = TestContext::new();
    let cases = [
        (json!({ "tries": "many" }), "tries_not_a_number"),
        (json!({ "tries": 0 }), "tries_below_minimum"),
        (json!({ "strictness": "high" }), "strictness_not_a_number"),
        (json!({ "strictness": 101 }), "strictness_out_of_range"),
    ];

    for (input, reason) in cases {
        let response = ctx.server.post("/api/settings/validate").json(&input).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["reason"], reason, "input: {input}");
    }
}
