//! OpenAI-compatible API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::chat::ChatRequest;
use crate::error::{Error, LlmError, Result};
use crate::message::{Message, Role};
use crate::provider::Provider;

use super::config::OpenAIConfig;
use super::types::{OpenAIChatRequest, OpenAIErrorResponse, OpenAIMessage};

/// OpenAI-compatible API client.
///
/// Works against the hosted OpenAI API as well as local servers such as
/// Ollama that expose the same `/chat/completions` route.
#[derive(Debug, Clone)]
pub struct OpenAI {
    pub(crate) config: Arc<OpenAIConfig>,
    pub(crate) client: Client,
    pub(crate) provider: &'static str,
}

impl OpenAI {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails when the API key is empty, the base URL is not an absolute
    /// `http(s)` URL, or the HTTP client cannot be built.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        Self::with_provider_name(config, "openai")
    }

    /// Create a client for `provider` using the given configuration.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn for_provider(provider: Provider, config: OpenAIConfig) -> Result<Self> {
        Self::with_provider_name(config, provider.as_str())
    }

    fn with_provider_name(config: OpenAIConfig, provider: &'static str) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(LlmError::auth(provider, "API key is required").into());
        }
        validate_base_url(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| LlmError::internal(format!("Failed to create HTTP client: {e}")))?;

        tracing::debug!(
            provider,
            base_url = %config.base_url,
            timeout_secs = ?config.timeout_secs,
            "created chat client"
        );

        Ok(Self {
            config: Arc::new(config),
            client,
            provider,
        })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the default model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the chat completions URL.
    #[must_use]
    pub fn chat_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build a JSON POST request with auth headers.
    pub(crate) fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
    }

    /// Convert a [`Message`] to wire format.
    pub(crate) fn convert_message(msg: &Message) -> OpenAIMessage {
        OpenAIMessage {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }

    /// Convert a wire message back, treating unknown roles as assistant output.
    pub(crate) fn parse_message(msg: OpenAIMessage) -> Message {
        let role = match msg.role.as_str() {
            "system" => Role::System,
            "user" => Role::User,
            _ => Role::Assistant,
        };
        Message {
            role,
            content: msg.content,
        }
    }

    /// Build the request body.
    pub(crate) fn build_body(&self, request: &ChatRequest) -> OpenAIChatRequest {
        let model = if request.model.is_empty() {
            self.config.model.clone()
        } else {
            request.model.clone()
        };

        OpenAIChatRequest {
            model,
            messages: request.messages.iter().map(Self::convert_message).collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stream: false,
        }
    }

    /// Parse an error response body.
    pub(crate) fn parse_error(&self, status: u16, body: &str) -> LlmError {
        if let Ok(error_response) = serde_json::from_str::<OpenAIErrorResponse>(body) {
            let error = error_response.error;
            let code = error
                .code
                .or(error.error_type)
                .unwrap_or_else(|| status.to_string());

            return match status {
                401 | 403 => LlmError::auth(self.provider, error.message),
                429 => LlmError::rate_limited(self.provider),
                _ => LlmError::provider_code(self.provider, code, error.message),
            };
        }

        LlmError::http_status(status, body.to_owned())
    }
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let parsed = Url::parse(base_url)
        .map_err(|e| Error::config(format!("invalid base URL '{base_url}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::config(format!(
            "invalid base URL '{base_url}': unsupported scheme '{other}'"
        ))),
    }
}
