//! Convenient re-exports for common usage.

pub use crate::chat::{
    ChatProvider, ChatProviderExt, ChatRequest, ChatResponse, SharedChatProvider, StopReason,
};
pub use crate::error::{Error, LlmError, LlmErrorKind, Result};
pub use crate::llms::{OpenAI, OpenAIConfig};
pub use crate::message::{Message, Role};
pub use crate::provider::{Provider, env_lookup};
pub use crate::usage::Usage;
