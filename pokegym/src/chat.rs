//! Chat request/response types and the provider trait.
//!
//! This module provides:
//! - [`ChatRequest`]: Request parameters for chat completions
//! - [`ChatResponse`]: Response from chat completions
//! - [`ChatProvider`]: Core trait for LLM providers
//!
//! # Example
//!
//! ```rust,ignore
//! use pokegym::prelude::*;
//!
//! let request = ChatRequest::new("gemma3:4b")
//!     .system("You are a helpful assistant.")
//!     .user("Say hello.")
//!     .max_tokens(50)
//!     .temperature(0.7);
//!
//! let response = provider.chat(&request).await?;
//! println!("{}", response.text().unwrap_or_default());
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;
use crate::usage::Usage;

/// A chat completion request to an LLM.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier (e.g., "gemma3:4b"). Empty means the provider default.
    #[serde(default)]
    pub model: String,

    /// Conversation messages, oldest first.
    #[serde(default)]
    pub messages: Vec<Message>,

    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 to 2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Creates a new request with the specified model.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Adds a system message.
    #[must_use]
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::system(content));
        self
    }

    /// Adds a user message.
    #[must_use]
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    /// Sets max tokens.
    #[must_use]
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets temperature.
    #[must_use]
    pub const fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum StopReason {
    /// Natural stop (end of response).
    #[default]
    Stop,
    /// Maximum token limit reached.
    Length,
    /// Model decided to call tools.
    ToolCalls,
    /// Content was filtered by safety systems.
    ContentFilter,
}

impl StopReason {
    /// Maps an OpenAI `finish_reason` string. Unknown or missing values are `Stop`.
    #[must_use]
    pub fn from_finish_reason(reason: Option<&str>) -> Self {
        match reason {
            Some("length") => Self::Length,
            Some("tool_calls") => Self::ToolCalls,
            Some("content_filter") => Self::ContentFilter,
            _ => Self::Stop,
        }
    }
}

/// A chat completion response from an LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated message.
    pub message: Message,

    /// Why the model stopped generating.
    pub stop_reason: StopReason,

    /// Token usage statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,

    /// Model identifier used for this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Unique completion ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ChatResponse {
    /// Creates a new response with a message.
    #[must_use]
    pub const fn new(message: Message) -> Self {
        Self {
            message,
            stop_reason: StopReason::Stop,
            usage: None,
            model: None,
            id: None,
        }
    }

    /// Returns the generated text, if the model produced any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.message.content.clone()
    }
}

/// Core trait for chat-capable LLM backends.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a chat completion request and receive a complete response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the server answers
    /// with a non-success status, or the body is not a valid completion.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;

    /// Short provider name used in logs and error messages.
    fn provider_name(&self) -> &'static str;

    /// Model used when a request leaves `model` empty.
    fn default_model(&self) -> &str;
}

/// Convenience helpers available on every [`ChatProvider`].
#[async_trait]
pub trait ChatProviderExt: ChatProvider {
    /// Send a system prompt plus one user prompt and return the reply text.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ChatProvider::chat`].
    async fn complete_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(self.default_model())
            .system(system)
            .user(prompt);
        let response = self.chat(&request).await?;
        Ok(response.text().unwrap_or_default())
    }
}

impl<T: ChatProvider + ?Sized> ChatProviderExt for T {}

/// Type alias for an Arc-wrapped `ChatProvider`.
pub type SharedChatProvider = Arc<dyn ChatProvider>;
