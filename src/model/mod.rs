//! Chat-completion client for a local model server.
//!
//! [`ModelHandler`] talks to an OpenAI-compatible `/chat/completions`
//! endpoint (Ollama by default). A handle only exists once the HTTP client is
//! built, so every call on it can go straight to the network. Request-time
//! failures never propagate: the probe reports `false` and generation reports
//! `None`, and the caller decides what to do instead.

mod request;
mod response;


pub use request::{ChatCompletionRequest, Message};
pub use response::{ChatCompletionResponse, Choice};

use crate::config::EndpointSettings;
use crate::error::{PostError, Result};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

/// Temperature used when the caller has no preference.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

const PROBE_PROMPT: &str = "Hello";
const PROBE_MAX_TOKENS: u32 = 5;

/// Text generation as seen by the orchestrator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Name of the model requests are sent to.
    fn model_name(&self) -> &str;

    /// Whether the model answers a trivial request. Never errors.
    async fn test_connection(&self) -> bool;

    /// Generate a completion, or `None` if generation is unavailable.
    async fn generate_content(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Option<String>;
}

/// Why a single request produced no text. Logged, never returned to callers.
#[derive(Debug, Error)]
enum RequestError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response had no usable choice")]
    EmptyChoice,
}

/// Ready-to-use client for one model.
#[derive(Debug, Clone)]
pub struct ModelHandler {
    model: String,
    completions_url: String,
    api_key: Option<String>,
    probe_timeout: Duration,
    request_timeout: Duration,
    max_tokens: u32,
    client: reqwest::Client,
}

impl ModelHandler {
    /// Build a handler for `model` against the configured endpoint.
    ///
    /// # Returns
    ///
    /// * `Ok(ModelHandler)` - Client built; no request has been made yet
    /// * `Err(PostError::Generation)` - Empty model name, bad base URL, or the
    ///   HTTP client could not be constructed
    #[instrument(skip(settings), fields(base_url = %settings.base_url))]
    pub fn connect(model: &str, settings: &EndpointSettings) -> Result<Self> {
        let model = model.trim();
        if model.is_empty() {
            return Err(PostError::Generation("model name is empty".to_string()));
        }

        let base_url = settings.base_url.trim_end_matches('/');
        reqwest::Url::parse(base_url).map_err(|e| {
            PostError::Generation(format!("invalid endpoint URL '{}': {}", base_url, e))
        })?;

        let probe_timeout = Duration::from_secs(settings.probe_timeout_secs);
        let client = reqwest::Client::builder()
            .connect_timeout(probe_timeout)
            .build()
            .map_err(|e| PostError::Generation(format!("failed to build HTTP client: {}", e)))?;

        info!(model, "model client initialized");
        Ok(Self {
            model: model.to_string(),
            completions_url: format!("{}/chat/completions", base_url),
            api_key: settings.api_key.clone(),
            probe_timeout,
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
            max_tokens: settings.max_tokens,
            client,
        })
    }

    /// Full URL requests are posted to.
    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }

    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
        timeout: Duration,
    ) -> std::result::Result<String, RequestError> {
        debug!(url = %self.completions_url, max_tokens = request.max_tokens, "sending chat completion request");

        let mut req = self
            .client
            .post(&self.completions_url)
            .timeout(timeout)
            .json(request);
        if let Some(api_key) = &self.api_key {
            req = req.bearer_auth(api_key);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status { status, body });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        parsed.first_text().ok_or(RequestError::EmptyChoice)
    }
}

#[async_trait]
impl TextGenerator for ModelHandler {
    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self), fields(model = %self.model))]
    async fn test_connection(&self) -> bool {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message::user(PROBE_PROMPT)],
            max_tokens: PROBE_MAX_TOKENS,
            temperature: None,
            stream: false,
        };

        // A five-token reply may legitimately be blank; reaching the model is enough.
        match self.chat_completion(&request, self.probe_timeout).await {
            Ok(_) | Err(RequestError::EmptyChoice) => {
                info!("model is available");
                true
            }
            Err(e) => {
                warn!(error = %e, "model is not available");
                false
            }
        }
    }

    #[instrument(skip(self, system_prompt, user_prompt), fields(model = %self.model))]
    async fn generate_content(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Option<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message::system(system_prompt), Message::user(user_prompt)],
            max_tokens: self.max_tokens,
            temperature: Some(temperature),
            stream: false,
        };

        match self.chat_completion(&request, self.request_timeout).await {
            Ok(content) => {
                info!(chars = content.len(), "content generated");
                Some(content)
            }
            Err(e) => {
                error!(error = %e, "content generation failed");
                None
            }
        }
    }
}
