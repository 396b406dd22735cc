//! API documentation module
//!
//! Provides the OpenAPI specification for the relay endpoints.

pub mod openapi;

pub use openapi::RelayApiDoc;
