//! Check 2: the Pokemon Gym agent can be constructed.

use demo_agent::{AIServerAgent, AgentConfig};

use crate::checks::CheckOutcome;

/// Builds an [`AIServerAgent`] from `config` and reports whether that worked.
///
/// The agent is dropped straight away; nothing is sent to the backend.
#[must_use]
pub fn check_agent(config: &AgentConfig) -> CheckOutcome {
    tracing::info!(
        provider = %config.provider,
        model = %config.model_name,
        "constructing agent"
    );

    match AIServerAgent::from_config(config.clone()) {
        Ok(agent) => {
            tracing::debug!(base_url = agent.base_url(), "agent constructed");
            CheckOutcome::pass(vec![
                "✅ Pokemon agent with Ollama provider created successfully!".to_owned(),
            ])
        }
        Err(e) => {
            tracing::warn!(error = %e, "agent construction failed");
            CheckOutcome::fail(vec![format!(
                "❌ Failed to create Pokemon agent with Ollama: {e}"
            )])
        }
    }
}
