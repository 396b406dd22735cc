//! Completion provider abstraction
//!
//! Defines the seam between the relay and the upstream completion API so the
//! relay can be exercised against fakes and mock servers.

use async_trait::async_trait;

use crate::{
    config::Credentials,
    error::RelayResult,
    yandex::models::{CompletionReply, CompletionRequest},
};

/// Trait defining the interface for completion providers
///
/// # Security
///
/// Implementations MUST:
/// - Take credentials only from the `Credentials` argument, never from the inbound request
/// - Keep upstream error bodies out of the returned error's caller-facing message
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name for logging and metrics
    fn name(&self) -> &'static str;

    /// Issue one completion call
    ///
    /// A non-success status maps to `RelayError::Upstream`. A success body is
    /// returned as parsed, with its raw text, even if it carries no generated text.
    async fn complete(
        &self,
        credentials: &Credentials,
        request: &CompletionRequest,
    ) -> RelayResult<CompletionReply>;
}
