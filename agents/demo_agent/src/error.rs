//! Agent construction and runtime errors.

use pokegym::provider::Provider;

/// Result type alias for agent operations.
pub type Result<T> = std::result::Result<T, AgentError>;

/// Errors raised while building or running an [`crate::AIServerAgent`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AgentError {
    /// The provider name did not match any known backend.
    #[error("unknown provider '{0}' (expected one of: ollama, openai, openrouter, lmstudio)")]
    UnknownProvider(String),

    /// The model name was empty.
    #[error("model_name must not be empty")]
    MissingModel,

    /// A hosted provider was selected but no API key is available.
    #[error("{provider} provider requires the {env} environment variable")]
    MissingApiKey {
        /// Provider that needs the key.
        provider: Provider,
        /// Variable the key is read from.
        env: &'static str,
    },

    /// The underlying chat client failed.
    #[error(transparent)]
    Client(#[from] pokegym::Error),
}
