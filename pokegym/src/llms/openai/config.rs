//! OpenAI-compatible client configuration.

use crate::error::{LlmError, Result};
use crate::provider::Provider;

/// Configuration for the OpenAI-compatible client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAIConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Base URL for the API, including the version prefix (e.g. `/v1`).
    pub base_url: String,
    /// Default model to use.
    pub model: String,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl OpenAIConfig {
    /// Default OpenAI API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    /// Default model.
    pub const DEFAULT_MODEL: &'static str = "gpt-4o";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Creates a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Creates configuration for `provider`, reading overrides through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an auth error when the provider needs an API key and none is set.
    pub fn for_provider<F>(provider: Provider, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = provider.resolve_api_key(&lookup).ok_or_else(|| {
            LlmError::auth(
                provider.as_str(),
                format!(
                    "{} environment variable not set",
                    provider.api_key_env().unwrap_or("API key")
                ),
            )
        })?;

        Ok(Self {
            api_key,
            base_url: provider.resolve_base_url(&lookup),
            ..Self::default()
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the default model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the request timeout. Zero disables it.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = if secs == 0 { None } else { Some(secs) };
        self
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            model: Self::DEFAULT_MODEL.to_owned(),
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}
