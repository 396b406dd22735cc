//! Request logging utilities for prompt relaying
//!
//! Provides structured logging with correlation IDs for tracing a relay call
//! from the inbound request through the upstream completion.

use std::time::Instant;
use tracing::{error, info, warn, Span};
use uuid::Uuid;

/// Context for tracking a request through the system
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Completion provider handling this request
    pub provider: String,
    /// Inbound endpoint being served
    pub endpoint: String,
    /// Model name used for the upstream call
    pub model: Option<String>,
    /// Prompt length in characters; the prompt itself is never logged
    pub prompt_chars: Option<usize>,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider: &str, endpoint: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            provider: provider.to_string(),
            endpoint: endpoint.to_string(),
            model: None,
            prompt_chars: None,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Record the prompt length
    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt_chars = Some(prompt.chars().count());
        self
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log request initiation
    pub fn log_request_start(&self) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            model = ?self.model,
            prompt_chars = ?self.prompt_chars,
            "Relay request started"
        );
    }

    /// Log successful request completion
    pub fn log_request_complete(&self, text_chars: usize, tokens: Option<u64>) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            model = ?self.model,
            text_chars = %text_chars,
            tokens = ?tokens,
            elapsed_ms = %self.elapsed_ms(),
            "Relay request completed successfully"
        );
    }

    /// Log a request rejected before any upstream call
    pub fn log_rejected(&self, reason: &str) {
        warn!(
            trace_id = %self.trace_id,
            endpoint = %self.endpoint,
            reason = %reason,
            "Relay request rejected"
        );
    }

    /// Log request failure
    pub fn log_error(&self, error: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
            model = ?self.model,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Relay request failed"
        );
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "relay_request",
            trace_id = %self.trace_id,
            provider = %self.provider,
            endpoint = %self.endpoint,
        )
    }
}
