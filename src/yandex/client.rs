//! YandexGPT API client
//!
//! HTTP client for the foundation models completion endpoint.

use async_trait::async_trait;
use tracing::{debug, error, instrument};

use crate::{
    config::{Config, Credentials},
    error::{RelayError, RelayResult},
    proxy::{headers::build_completion_headers, CompletionProvider},
    routes::metrics::record_upstream_error,
    yandex::models::{CompletionReply, CompletionRequest},
};

/// YandexGPT completion client
pub struct YandexGptClient {
    client: reqwest::Client,
    completion_url: String,
}

impl YandexGptClient {
    /// Create a new YandexGPT client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            completion_url: config.completion_url.clone(),
        }
    }
}

#[async_trait]
impl CompletionProvider for YandexGptClient {
    fn name(&self) -> &'static str {
        "yandexgpt"
    }

    #[instrument(skip_all, fields(provider = "yandexgpt"))]
    async fn complete(
        &self,
        credentials: &Credentials,
        request: &CompletionRequest,
    ) -> RelayResult<CompletionReply> {
        let headers = build_completion_headers(credentials)?;

        debug!(url = %self.completion_url, "Sending completion request to YandexGPT");

        let response = self
            .client
            .post(&self.completion_url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.completion_url, error = %e, "Failed to send request to YandexGPT");
                e
            })?;

        let status = response.status();
        debug!(status = %status, "YandexGPT response status");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "YandexGPT API error");
            record_upstream_error(status.as_u16());
            return Err(RelayError::Upstream { status, body });
        }

        let body = response.text().await?;
        CompletionReply::parse(body.clone()).map_err(|e| {
            error!(error = %e, body = %body, "Failed to parse YandexGPT response");
            e.into()
        })
    }
}
