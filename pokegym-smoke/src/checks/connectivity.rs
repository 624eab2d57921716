//! Check 1: the Ollama server answers a chat completion.

use pokegym::prelude::*;

use crate::checks::CheckOutcome;
use crate::config::SmokeConfig;

/// System instruction sent with the connectivity request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
/// User prompt sent with the connectivity request.
pub const USER_PROMPT: &str = "Say hello and confirm you can see this message.";
/// Response length cap for the connectivity request.
pub const MAX_TOKENS: u32 = 50;
/// Sampling temperature for the connectivity request.
pub const TEMPERATURE: f32 = 0.7;

/// The fixed two-message request sent to `model`.
#[must_use]
pub fn smoke_request(model: &str) -> ChatRequest {
    ChatRequest::new(model)
        .system(SYSTEM_PROMPT)
        .user(USER_PROMPT)
        .max_tokens(MAX_TOKENS)
        .temperature(TEMPERATURE)
}

/// Builds a client for `config` and sends the smoke request.
pub async fn check_connectivity(config: &SmokeConfig) -> CheckOutcome {
    let client_config = OpenAIConfig::new(Provider::Ollama.placeholder_api_key().unwrap_or("ollama"))
        .with_base_url(config.base_url.as_str())
        .with_model(config.model.as_str())
        .with_timeout(config.timeout_secs);

    match OpenAI::for_provider(Provider::Ollama, client_config) {
        Ok(client) => check_with_provider(&client, config).await,
        Err(e) => {
            tracing::warn!(base_url = %config.base_url, error = %e, "could not build chat client");
            failure(&e, config)
        }
    }
}

/// Sends the smoke request through an already-built provider.
pub async fn check_with_provider(provider: &dyn ChatProvider, config: &SmokeConfig) -> CheckOutcome {
    let request = smoke_request(&config.model);
    tracing::info!(
        provider = provider.provider_name(),
        base_url = %config.base_url,
        model = %config.model,
        "checking connectivity"
    );

    match provider.chat(&request).await {
        Ok(response) => CheckOutcome::pass(vec![
            "✅ Ollama connection successful!".to_owned(),
            format!("Response: {}", response.text().unwrap_or_default()),
        ]),
        Err(e) => {
            tracing::warn!(base_url = %config.base_url, error = %e, "connectivity check failed");
            failure(&e, config)
        }
    }
}

fn failure(error: &Error, config: &SmokeConfig) -> CheckOutcome {
    CheckOutcome::fail(vec![
        format!("❌ Ollama connection failed: {error}"),
        String::new(),
        "Troubleshooting:".to_owned(),
        "1. Make sure Ollama is installed and running".to_owned(),
        format!("2. Pull a vision model: ollama pull {}", config.model),
        "3. Check if Ollama is running on the correct port".to_owned(),
        format!("4. Current base URL: {}", config.base_url),
    ])
}
