//! Smoke check configuration.
//!
//! Everything has a default; `OLLAMA_BASE_URL` is the only setting read from
//! the environment. Command-line flags are applied on top by the binary.

use demo_agent::AgentConfig;
use pokegym::llms::OpenAIConfig;
use pokegym::provider::{Provider, env_lookup};

/// Settings for one smoke run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeConfig {
    /// Base URL of the Ollama OpenAI-compatible API.
    pub base_url: String,
    /// Model used for the connectivity request.
    pub model: String,
    /// Request timeout in seconds; 0 waits indefinitely.
    pub timeout_secs: u64,
    /// How the agent check builds the agent.
    pub agent: AgentConfig,
}

impl SmokeConfig {
    /// Model pulled for the Pokemon Gym by default.
    pub const DEFAULT_MODEL: &'static str = "gemma3:4b";

    /// Builds the default configuration, resolving `OLLAMA_BASE_URL` through `lookup`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = Provider::Ollama.resolve_base_url(lookup);
        Self {
            agent: AgentConfig::new(Provider::Ollama.as_str(), Self::DEFAULT_MODEL)
                .with_base_url(base_url.clone()),
            base_url,
            model: Self::DEFAULT_MODEL.to_owned(),
            timeout_secs: OpenAIConfig::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Builds the default configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Points both checks at another server.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.agent.base_url = Some(url.clone());
        self.base_url = url;
        self
    }

    /// Uses another model for both checks.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.agent.model_name.clone_from(&model);
        self.model = model;
        self
    }

    /// Sets the request timeout; 0 waits indefinitely.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Command suggested once both checks pass.
    #[must_use]
    pub fn follow_up_command(&self) -> String {
        format!(
            "cargo run -p demo_agent -- --provider {} --model {}",
            self.agent.provider, self.agent.model_name
        )
    }
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
