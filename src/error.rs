//! Error types for the prompt relay
//!
//! Every failure is terminal for the current request. Only caller mistakes are
//! described verbatim; configuration and upstream details stay in the server logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Relay-level errors
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    BadRequest(String),

    /// Credentials are missing or unusable; the detail is never sent to the caller
    #[error("Server configuration error: {0}")]
    Configuration(String),

    /// Completion API answered with a non-success status
    #[error("YandexGPT API error: {}", status.as_u16())]
    Upstream { status: StatusCode, body: String },

    /// Completion API answered successfully but without generated text
    #[error("Unexpected API response")]
    UnexpectedResponse(String),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl RelayError {
    /// Status code returned to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream { status, .. } => *status,
            RelayError::Configuration(_)
            | RelayError::UnexpectedResponse(_)
            | RelayError::HttpError(_)
            | RelayError::JsonError(_)
            | RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for metrics
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::MethodNotAllowed => "method_not_allowed",
            RelayError::BadRequest(_) => "bad_request",
            RelayError::Configuration(_) => "configuration_error",
            RelayError::Upstream { .. } => "upstream_error",
            RelayError::UnexpectedResponse(_) => "unexpected_response",
            RelayError::HttpError(_) | RelayError::JsonError(_) | RelayError::Internal(_) => {
                "internal_error"
            }
        }
    }

    /// Body returned to the caller
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            RelayError::MethodNotAllowed | RelayError::BadRequest(_) => {
                ErrorResponse::new(self.to_string())
            }
            RelayError::Configuration(_) => ErrorResponse::new("Server configuration error"),
            RelayError::Upstream { status, .. } => {
                ErrorResponse::new(format!("YandexGPT API error: {}", status.as_u16()))
            }
            RelayError::UnexpectedResponse(_) => ErrorResponse::new("Unexpected API response"),
            RelayError::HttpError(e) => ErrorResponse::internal(e.to_string()),
            RelayError::JsonError(e) => ErrorResponse::internal(e.to_string()),
            RelayError::Internal(e) => ErrorResponse::internal(e.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error summary
    pub error: String,
    /// Diagnostic detail, present only for unexpected failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    fn internal(message: String) -> Self {
        Self {
            error: "Internal server error".to_string(),
            message: Some(message),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if matches!(
            self,
            RelayError::HttpError(_) | RelayError::JsonError(_) | RelayError::Internal(_)
        ) {
            error!(error = %self, "Unexpected failure while relaying prompt");
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias for convenience
pub type RelayResult<T> = Result<T, RelayError>;
