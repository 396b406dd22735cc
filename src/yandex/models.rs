//! YandexGPT API data models
//!
//! Data structures for completion requests and responses.

use serde::{Deserialize, Serialize};

/// Sampling temperature sent with every completion
pub const TEMPERATURE: f64 = 0.6;
/// Completion length cap. The API expects it as a string.
pub const MAX_TOKENS: &str = "2000";

/// Build the model URI for a folder and model name
pub fn model_uri(folder_id: &str, model: &str) -> String {
    format!("gpt://{}/{}", folder_id, model)
}

/// Message author role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in the completion conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

/// Completion options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions {
    pub stream: bool,
    pub temperature: f64,
    pub max_tokens: String,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            stream: false,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS.to_string(),
        }
    }
}

/// Request body for the completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub model_uri: String,
    pub completion_options: CompletionOptions,
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Single-turn request: the persona as system message, then the prompt verbatim
    pub fn new(model_uri: String, persona: &str, prompt: impl Into<String>) -> Self {
        Self {
            model_uri,
            completion_options: CompletionOptions::default(),
            messages: vec![Message::system(persona), Message::user(prompt)],
        }
    }
}

/// Message inside a completion alternative
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlternativeMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// One generated alternative
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Alternative {
    #[serde(default)]
    pub message: Option<AlternativeMessage>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Token usage reported by the API
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompletionUsage {
    #[serde(default)]
    pub input_text_tokens: Option<String>,
    #[serde(default)]
    pub completion_tokens: Option<String>,
    #[serde(default)]
    pub total_tokens: Option<String>,
}

/// Result payload of a completion
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    #[serde(default)]
    pub alternatives: Option<Vec<Option<Alternative>>>,
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
    #[serde(default)]
    pub model_version: Option<String>,
}

/// Response body of the completion endpoint
///
/// Every level is optional: a body without generated text is a valid response
/// that the relay reports as a contract violation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompletionResponse {
    #[serde(default)]
    pub result: Option<CompletionResult>,
}

impl CompletionResponse {
    /// Generated text of the first alternative, if present and non-empty
    pub fn text(&self) -> Option<&str> {
        self.result
            .as_ref()?
            .alternatives
            .as_ref()?
            .first()?
            .as_ref()?
            .message
            .as_ref()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Total tokens reported by the API, if parseable
    pub fn total_tokens(&self) -> Option<u64> {
        self.result
            .as_ref()?
            .usage
            .as_ref()?
            .total_tokens
            .as_deref()?
            .parse()
            .ok()
    }
}

/// A parsed completion together with the body it was parsed from
///
/// Typed parsing drops unknown fields, so diagnostics about a contract
/// violation are taken from `raw_body`.
#[derive(Debug, Clone)]
pub struct CompletionReply {
    pub response: CompletionResponse,
    pub raw_body: String,
}

impl CompletionReply {
    /// Parse a success body. A bare `null` is an empty response.
    pub fn parse(raw_body: String) -> serde_json::Result<Self> {
        let response = serde_json::from_str::<Option<CompletionResponse>>(&raw_body)?
            .unwrap_or_default();
        Ok(Self { response, raw_body })
    }
}
