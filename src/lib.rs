//! Prompt relay - HTTP relay for the YandexGPT completion API
//!
//! This library provides the core functionality for the relay server. It
//! accepts a prompt from a front-end, attaches server-held credentials, calls
//! the completion API and returns the generated text, so the API key never
//! reaches client-side code.

pub mod config;
pub mod docs;
pub mod error;
pub mod proxy;
pub mod relay;
pub mod routes;
pub mod yandex;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

pub use crate::config::{Config, Credentials, CredentialsError};
pub use crate::proxy::CompletionProvider;
pub use crate::relay::{EnhanceRequest, EnhanceResponse, PromptRelay};
pub use crate::yandex::YandexGptClient;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Relay forwarding prompts to the completion provider
    pub relay: PromptRelay,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()?;

        let provider: Arc<dyn CompletionProvider> =
            Arc::new(YandexGptClient::new(http_client, &config));

        Ok(Self::with_provider(config, provider))
    }

    /// Create an application state around an existing completion provider
    pub fn with_provider(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        let relay = PromptRelay::new(provider, config.credentials.clone(), config.model.clone());

        Self {
            config,
            start_time: Instant::now(),
            relay,
        }
    }
}
