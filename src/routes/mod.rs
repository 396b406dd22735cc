//! HTTP routes for the prompt relay
//!
//! This module defines all HTTP endpoints exposed by the relay.

pub mod enhance;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION, CONTENT_TYPE,
        },
        HeaderValue, Method,
    },
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{docs::RelayApiDoc, relay::ENHANCE_ENDPOINT, AppState};

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Permissive CORS: the relay is called from browser front-ends on any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    // CorsLayer only advertises methods and headers on pre-flight responses
    let allow_methods = SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    let allow_headers = SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );

    let api_routes = Router::new()
        .route(
            ENHANCE_ENDPOINT,
            post(enhance::enhance)
                .options(enhance::preflight)
                .fallback(enhance::method_not_allowed),
        )
        .route("/api/openapi.json", get(openapi_json));

    // Operational routes (health checks, metrics)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (applied to all routes)
        .layer(TraceLayer::new_for_http())
        .layer(allow_methods)
        .layer(allow_headers)
        .layer(cors)
        .with_state(state)
}

/// Handler for the OpenAPI JSON document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(RelayApiDoc::openapi())
}
