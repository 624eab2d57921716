//! The agent itself.

use pokegym::prelude::*;

use crate::config::AgentConfig;
use crate::error::{AgentError, Result};

/// Instructions sent with every turn unless overridden.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an AI agent playing Pokemon Red. \
Read the game state you are given and answer with the next action to take, \
keeping your reasoning short.";

/// A Pokemon Gym player backed by a language model server.
#[derive(Debug, Clone)]
pub struct AIServerAgent {
    provider: Provider,
    model_name: String,
    system_prompt: String,
    client: OpenAI,
}

impl AIServerAgent {
    /// Builds an agent for `provider` and `model_name`, reading base URL and
    /// API key overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Fails on an unknown provider, an empty model name, a missing API key
    /// for a hosted provider, or an invalid base URL.
    pub fn new(provider: impl Into<String>, model_name: impl Into<String>) -> Result<Self> {
        Self::from_config(AgentConfig::new(provider, model_name))
    }

    /// Builds an agent from a full configuration, using the process environment
    /// for anything the configuration leaves unset.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: AgentConfig) -> Result<Self> {
        Self::from_config_with(config, env_lookup)
    }

    /// Builds an agent, resolving unset values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config_with<F>(config: AgentConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider: Provider = config
            .provider
            .parse()
            .map_err(|_| AgentError::UnknownProvider(config.provider.clone()))?;

        let model_name = config.model_name.trim();
        if model_name.is_empty() {
            return Err(AgentError::MissingModel);
        }

        let api_key = config
            .api_key
            .or_else(|| provider.resolve_api_key(&lookup))
            .ok_or(AgentError::MissingApiKey {
                provider,
                env: provider.api_key_env().unwrap_or("API key"),
            })?;
        let base_url = config
            .base_url
            .unwrap_or_else(|| provider.resolve_base_url(&lookup));

        let client_config = OpenAIConfig::new(api_key)
            .with_base_url(base_url)
            .with_model(model_name)
            .with_timeout(
                config
                    .timeout_secs
                    .unwrap_or(OpenAIConfig::DEFAULT_TIMEOUT_SECS),
            );
        let client = OpenAI::for_provider(provider, client_config)?;

        tracing::info!(
            %provider,
            model = model_name,
            base_url = client.base_url(),
            "agent created"
        );

        Ok(Self {
            provider,
            model_name: model_name.to_owned(),
            system_prompt: config
                .system_prompt
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_owned()),
            client,
        })
    }

    /// The backend this agent talks to.
    #[must_use]
    pub const fn provider(&self) -> Provider {
        self.provider
    }

    /// The model this agent asks.
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Base URL of the backend.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Instructions sent with every turn.
    #[must_use]
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Sends one prompt and returns the model's reply.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::Client`] when the backend call fails.
    pub async fn ask(&self, prompt: &str) -> Result<String> {
        let reply = self
            .client
            .complete_with_system(&self.system_prompt, prompt)
            .await?;
        tracing::debug!(chars = reply.len(), "agent reply received");
        Ok(reply)
    }
}
