//! Prompt enhancement endpoint
//!
//! `POST /api/enhance` relays a prompt to the completion API.
//! `OPTIONS` is acknowledged without side effects; other methods get 405.

use std::sync::Arc;
use std::time::Instant;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use tracing::debug;

use crate::{
    error::{ErrorResponse, RelayError},
    relay::{EnhanceRequest, EnhanceResponse},
    routes::metrics::{record_rejected, record_request},
    AppState,
};

/// Relay a prompt to the completion API
///
/// The body is parsed here rather than through the `Json` extractor so that
/// malformed input produces the relay's own error shape.
#[utoipa::path(
    post,
    path = "/api/enhance",
    tag = "Relay",
    request_body = EnhanceRequest,
    responses(
        (status = 200, description = "Generated text", body = EnhanceResponse),
        (status = 400, description = "Missing or empty prompt", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Configuration error, unexpected upstream response or internal failure", body = ErrorResponse),
        (status = "default", description = "Upstream status passed through with a generic error", body = ErrorResponse)
    )
)]
pub async fn enhance(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<EnhanceResponse>, RelayError> {
    let start_time = Instant::now();

    let result = match serde_json::from_slice::<EnhanceRequest>(&body) {
        Ok(request) => state.relay.enhance(request).await,
        Err(e) => {
            debug!(error = %e, "Rejecting malformed request body");
            Err(RelayError::BadRequest("Invalid JSON body".to_string()))
        }
    };

    let outcome = match &result {
        Ok(_) => "success",
        Err(e) => e.code(),
    };
    record_request(outcome, start_time.elapsed().as_secs_f64());

    result.map(Json)
}

/// Cross-origin pre-flight acknowledgment
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any method other than POST and OPTIONS
pub async fn method_not_allowed() -> RelayError {
    record_rejected(RelayError::MethodNotAllowed.code());
    RelayError::MethodNotAllowed
}
