//! Prompt relay
//!
//! Validates an inbound prompt, attaches server-held credentials, calls the
//! completion provider once and unwraps the generated text.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, Instrument};
use utoipa::ToSchema;

use crate::{
    config::{Credentials, CredentialsError},
    error::{RelayError, RelayResult},
    proxy::{CompletionProvider, RequestContext},
    yandex::models::{model_uri, CompletionRequest},
};

/// Inbound endpoint served by the relay
pub const ENHANCE_ENDPOINT: &str = "/api/enhance";

/// System instruction sent ahead of every prompt.
///
/// Steers the model towards asking a non-technical customer one simple
/// clarifying question at a time while drafting a technical specification.
pub const PERSONA: &str = "Ты помощник для создания технического задания. Задавай ПРОСТЫЕ вопросы обычному заказчику. Правила: 1) Говори как с другом, без специальных терминов 2) Один вопрос за раз 3) Спрашивай: что нужно, для кого, когда 4) Избегай слов: архитектура, API, стек, фреймворк. Вместо \"Какая архитектура нужна?\" спроси \"Где и как это будет работать?\"";

/// Relay request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EnhanceRequest {
    /// Free-text prompt to complete; must be non-empty
    #[serde(default)]
    pub prompt: Option<String>,
}

impl EnhanceRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
        }
    }
}

/// Relay response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct EnhanceResponse {
    /// Generated text
    pub text: String,
}

/// Forwards prompts to a completion provider
pub struct PromptRelay {
    provider: Arc<dyn CompletionProvider>,
    credentials: Result<Credentials, CredentialsError>,
    model: String,
}

impl PromptRelay {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        credentials: Result<Credentials, CredentialsError>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            credentials,
            model: model.into(),
        }
    }

    /// Whether credentials are available for upstream calls
    pub fn is_configured(&self) -> bool {
        self.credentials.is_ok()
    }

    /// Reason credentials are unavailable, if any
    pub fn configuration_error(&self) -> Option<&CredentialsError> {
        self.credentials.as_ref().err()
    }

    /// Relay one prompt
    ///
    /// Every call issues its own upstream request; nothing is cached or retried.
    pub async fn enhance(&self, request: EnhanceRequest) -> RelayResult<EnhanceResponse> {
        let ctx = RequestContext::new(self.provider.name(), ENHANCE_ENDPOINT);

        let Some(prompt) = request.prompt.filter(|p| !p.is_empty()) else {
            ctx.log_rejected("missing prompt");
            return Err(RelayError::BadRequest("Prompt is required".to_string()));
        };

        let credentials = match &self.credentials {
            Ok(credentials) => credentials,
            Err(e) => {
                error!(trace_id = %ctx.trace_id, reason = %e, "Missing upstream credentials");
                return Err(RelayError::Configuration(e.to_string()));
            }
        };

        // The model URI embeds the folder id, so only the model name is logged
        let ctx = ctx.with_model(&self.model).with_prompt(&prompt);
        let uri = model_uri(&credentials.folder_id, &self.model);
        let payload = CompletionRequest::new(uri, PERSONA, prompt);
        ctx.log_request_start();

        let reply = self
            .provider
            .complete(credentials, &payload)
            .instrument(ctx.create_span())
            .await
            .map_err(|e| {
                ctx.log_error(&e.to_string());
                e
            })?;

        match reply.response.text() {
            Some(text) => {
                ctx.log_request_complete(text.chars().count(), reply.response.total_tokens());
                Ok(EnhanceResponse {
                    text: text.to_string(),
                })
            }
            None => {
                error!(trace_id = %ctx.trace_id, payload = %reply.raw_body, "Unexpected API response structure");
                Err(RelayError::UnexpectedResponse(reply.raw_body))
            }
        }
    }
}
