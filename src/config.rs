//! Configuration management for the prompt relay
//!
//! Configuration is loaded from environment variables. Upstream credentials are
//! validated once into a typed result; a missing credential does not stop the
//! server from starting, it fails every relay request with a configuration error.

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, Secret};
use std::env;
use thiserror::Error;

/// Environment variable holding the YandexGPT API key
pub const API_KEY_VAR: &str = "YANDEX_API_KEY";
/// Environment variable holding the Yandex Cloud folder id
pub const FOLDER_ID_VAR: &str = "YANDEX_FOLDER_ID";

/// Default YandexGPT completion endpoint
pub const DEFAULT_COMPLETION_URL: &str =
    "https://llm.api.cloud.yandex.net/foundationModels/v1/completion";
/// Default model name used in the model URI
pub const DEFAULT_MODEL: &str = "yandexgpt-lite";

/// Reason the upstream credentials could not be resolved
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Server-held credentials for the completion API
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: Secret<String>,
    /// Folder (tenant) id scoping requests on the upstream provider
    pub folder_id: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            folder_id: folder_id.into(),
        }
    }

    /// Resolve credentials from the process environment
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_values(env::var(API_KEY_VAR).ok(), env::var(FOLDER_ID_VAR).ok())
    }

    /// Validate raw credential values. Empty strings count as absent.
    pub fn from_values(
        api_key: Option<String>,
        folder_id: Option<String>,
    ) -> Result<Self, CredentialsError> {
        let api_key = api_key
            .filter(|v| !v.is_empty())
            .ok_or(CredentialsError::Missing(API_KEY_VAR))?;
        let folder_id = folder_id
            .filter(|v| !v.is_empty())
            .ok_or(CredentialsError::Missing(FOLDER_ID_VAR))?;

        Ok(Self::new(api_key, folder_id))
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Completion endpoint URL
    pub completion_url: String,
    /// Model name, combined with the folder id into `gpt://<folder>/<model>`
    pub model: String,
    /// Timeout applied to every upstream call (in seconds)
    pub upstream_timeout_seconds: u64,

    /// Upstream credentials, or the reason they are unavailable
    pub credentials: Result<Credentials, CredentialsError>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("RELAY_PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .context("Invalid RELAY_PORT")?,

            completion_url: env::var("YANDEX_COMPLETION_URL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_URL.to_string()),
            model: env::var("YANDEX_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            upstream_timeout_seconds: env::var("RELAY_UPSTREAM_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("Invalid RELAY_UPSTREAM_TIMEOUT_SECONDS")?,

            credentials: Credentials::from_env(),
        })
    }

    /// Configuration for a given upstream URL, used by tests and embedders
    pub fn with_completion_url(
        completion_url: impl Into<String>,
        credentials: Result<Credentials, CredentialsError>,
    ) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            completion_url: completion_url.into(),
            model: DEFAULT_MODEL.to_string(),
            upstream_timeout_seconds: 30,
            credentials,
        }
    }
}
