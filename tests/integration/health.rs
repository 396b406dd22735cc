//! Operational endpoint integration tests
//!
//! - GET /health - Full health check with credentials status
//! - GET /health/ready - Readiness probe
//! - GET /health/live - Liveness probe
//! - GET /api/openapi.json - OpenAPI document

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::RelayTestHarness;

#[tokio::test]
async fn test_health_endpoint_returns_proper_structure() {
    let harness = RelayTestHarness::new().await;

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let json: Value = response.json();

    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["uptime_seconds"].is_u64());
    assert!(json["timestamp"].is_string());
    assert_eq!(json["checks"]["credentials"]["status"], "healthy");
    assert!(json["checks"]["credentials"].get("error").is_none());
}

#[tokio::test]
async fn test_health_reports_missing_credential_by_name() {
    let harness = RelayTestHarness::without_credentials("YANDEX_FOLDER_ID").await;

    let response = harness.server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json: Value = response.json();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(
        json["checks"]["credentials"]["error"],
        "YANDEX_FOLDER_ID is not set"
    );
}

#[tokio::test]
async fn test_readiness_follows_credentials() {
    let ready = RelayTestHarness::new().await;
    ready.server.get("/health/ready").await.assert_status_ok();

    let not_ready = RelayTestHarness::without_credentials("YANDEX_API_KEY").await;
    let response = not_ready.server.get("/health/ready").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json: Value = response.json();
    assert_eq!(json["status"], "unhealthy");
}

#[tokio::test]
async fn test_liveness_ignores_credentials() {
    let harness = RelayTestHarness::without_credentials("YANDEX_API_KEY").await;

    let response = harness.server.get("/health/live").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_lists_enhance() {
    let harness = RelayTestHarness::new().await;

    let response = harness.server.get("/api/openapi.json").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["info"]["title"], "Prompt Relay API");
    assert!(json["paths"]["/api/enhance"]["post"].is_object());
}
