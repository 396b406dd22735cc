//! Mock YandexGPT completion API for testing
//!
//! Provides wiremock-based mocks for the foundation models endpoint:
//! - POST /foundationModels/v1/completion - Non-streaming completion
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::yandex::MockYandexGpt;
//!
//! #[tokio::test]
//! async fn test_with_yandex_mock() {
//!     let mock = MockYandexGpt::start().await;
//!     mock.mock_completion_success("Hello!").await;
//!
//!     // Use mock.completion_url() as YANDEX_COMPLETION_URL
//! }
//! ```

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Path of the completion endpoint on the mock server
pub const COMPLETION_PATH: &str = "/foundationModels/v1/completion";

/// Mock YandexGPT server wrapper
pub struct MockYandexGpt {
    server: MockServer,
}

impl MockYandexGpt {
    /// Start a new mock YandexGPT server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Full completion URL to configure the relay with
    pub fn completion_url(&self) -> String {
        format!("{}{}", self.server.uri(), COMPLETION_PATH)
    }

    /// Get all requests received by the mock server
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Parsed JSON bodies of all completion requests received
    pub async fn completion_bodies(&self) -> Vec<Value> {
        self.received_requests()
            .await
            .iter()
            .filter(|r| r.url.path() == COMPLETION_PATH)
            .map(|r| serde_json::from_slice(&r.body).expect("Completion body is not JSON"))
            .collect()
    }

    // =========================================================================
    // POST /foundationModels/v1/completion
    // =========================================================================

    /// Mock a successful completion returning `text`
    pub async fn mock_completion_success(&self, text: &str) {
        self.mock_completion_body(YandexTestData::completion(text)).await;
    }

    /// Mock a successful completion with an arbitrary body
    pub async fn mock_completion_body(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path(COMPLETION_PATH))
            .and(header_exists("Authorization"))
            .and(header_exists("x-folder-id"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a success status with a body that is not JSON
    pub async fn mock_completion_malformed(&self) {
        Mock::given(method("POST"))
            .and(path(COMPLETION_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html>gateway hiccup</html>")
                    .insert_header("Content-Type", "text/html"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock an upstream error status with a JSON error body
    pub async fn mock_completion_error(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETION_PATH))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(YandexTestData::error(status, message)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a success that must be hit exactly `times` times
    ///
    /// Verified when the mock server is dropped.
    pub async fn expect_completions(&self, text: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path(COMPLETION_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(YandexTestData::completion(text)))
            .expect(times)
            .mount(&self.server)
            .await;
    }
}

/// Canned YandexGPT payloads
pub struct YandexTestData;

impl YandexTestData {
    /// Completion response with a single final alternative
    pub fn completion(text: &str) -> Value {
        json!({
            "result": {
                "alternatives": [
                    {
                        "message": {
                            "role": "assistant",
                            "text": text
                        },
                        "status": "ALTERNATIVE_STATUS_FINAL"
                    }
                ],
                "usage": {
                    "inputTextTokens": "96",
                    "completionTokens": "12",
                    "totalTokens": "108"
                },
                "modelVersion": "23.10.2024"
            }
        })
    }

    /// Completion response whose result has no alternatives
    pub fn completion_without_alternatives() -> Value {
        json!({
            "result": {
                "alternatives": [],
                "modelVersion": "23.10.2024"
            }
        })
    }

    /// Error body in the shape returned by Yandex Cloud
    pub fn error(status: u16, message: &str) -> Value {
        json!({
            "error": {
                "grpcCode": 14,
                "httpCode": status,
                "message": message,
                "httpStatus": "Service Unavailable",
                "details": []
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_completion_success() {
        let mock = MockYandexGpt::start().await;
        mock.mock_completion_success("Hello!").await;

        let client = reqwest::Client::new();
        let response = client
            .post(mock.completion_url())
            .header("Authorization", "Api-Key test")
            .header("x-folder-id", "folder")
            .header("Content-Type", "application/json")
            .body("{}")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["result"]["alternatives"][0]["message"]["text"], "Hello!");
        assert_eq!(mock.completion_bodies().await, vec![json!({})]);
    }

    #[tokio::test]
    async fn test_mock_completion_requires_credentials_headers() {
        let mock = MockYandexGpt::start().await;
        mock.mock_completion_success("Hello!").await;

        let response = reqwest::Client::new()
            .post(mock.completion_url())
            .header("Content-Type", "application/json")
            .body("{}")
            .send()
            .await
            .unwrap();

        // No matching mock: wiremock answers 404
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_mock_completion_error() {
        let mock = MockYandexGpt::start().await;
        mock.mock_completion_error(503, "Model is overloaded").await;

        let response = reqwest::Client::new()
            .post(mock.completion_url())
            .body("{}")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 503);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"]["message"], "Model is overloaded");
    }
}
