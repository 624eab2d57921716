//! Agent configuration.

/// How to build an [`crate::AIServerAgent`].
///
/// Only `provider` and `model_name` are required; everything else falls back
/// to the provider's environment variables and defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentConfig {
    /// Provider name, e.g. `"ollama"`.
    pub provider: String,
    /// Model to ask, e.g. `"gemma3:4b"`.
    pub model_name: String,
    /// Base URL override.
    pub base_url: Option<String>,
    /// API key override.
    pub api_key: Option<String>,
    /// Request timeout in seconds; `Some(0)` disables it.
    pub timeout_secs: Option<u64>,
    /// System prompt override.
    pub system_prompt: Option<String>,
}

impl AgentConfig {
    /// Creates a configuration for `provider` and `model_name`.
    #[must_use]
    pub fn new(provider: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model_name: model_name.into(),
            ..Self::default()
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Sets the system prompt.
    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}
