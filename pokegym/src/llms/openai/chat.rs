//! `ChatProvider` implementation for the OpenAI-compatible client.

use async_trait::async_trait;

use crate::chat::{ChatProvider, ChatRequest, ChatResponse, StopReason};
use crate::error::{LlmError, Result};

use super::client::OpenAI;
use super::types::OpenAIChatResponse;

impl OpenAI {
    /// Parse the response into a [`ChatResponse`].
    pub(crate) fn parse_response(response: OpenAIChatResponse) -> Result<ChatResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::response_format("at least one choice", "empty choices"))?;

        Ok(ChatResponse {
            stop_reason: StopReason::from_finish_reason(choice.finish_reason.as_deref()),
            message: Self::parse_message(choice.message),
            usage: response.usage,
            model: response.model,
            id: response.id,
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAI {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = self.chat_url();
        let body = self.build_body(request);
        tracing::debug!(%url, model = %body.model, messages = body.messages.len(), "sending chat request");

        let response = self
            .build_request(&url)
            .json(&body)
            .send()
            .await
            .map_err(LlmError::from)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "chat request rejected");
            return Err(self.parse_error(status.as_u16(), &error_text).into());
        }

        let response_text = response.text().await.map_err(LlmError::from)?;
        let parsed: OpenAIChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            LlmError::response_format(
                "valid chat completion",
                format!("parse error: {e}, response: {response_text}"),
            )
        })?;

        let response = Self::parse_response(parsed)?;
        tracing::debug!(
            model = ?response.model,
            stop_reason = ?response.stop_reason,
            usage = ?response.usage,
            "chat response received"
        );
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }

    fn default_model(&self) -> &str {
        self.model()
    }
}
