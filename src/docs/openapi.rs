//! OpenAPI specification for the relay API
//!
//! Aggregates the relay endpoint and its schemas into a single OpenAPI document.

use utoipa::OpenApi;

use crate::{
    error::ErrorResponse,
    relay::{EnhanceRequest, EnhanceResponse},
};

/// OpenAPI specification for the prompt relay
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Prompt Relay API",
        version = "1.0.0",
        description = "Relays prompts to the YandexGPT completion API using server-held credentials"
    ),
    paths(
        crate::routes::enhance::enhance
    ),
    components(
        schemas(
            EnhanceRequest,
            EnhanceResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Relay", description = "Prompt relay endpoints")
    )
)]
pub struct RelayApiDoc;
