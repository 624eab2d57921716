//! Wire types for the `/chat/completions` endpoint.
//!
//! These map directly onto the OpenAI Chat Completions JSON that Ollama and
//! other compatible servers speak.

use serde::{Deserialize, Serialize};

use crate::usage::Usage;

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenAIChatRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub stream: bool,
}

/// Message format shared by requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Chat completion response body.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChatResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<OpenAIChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One generated alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChoice {
    pub message: OpenAIMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIErrorResponse {
    pub error: OpenAIError,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIError {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default, deserialize_with = "code_as_string")]
    pub code: Option<String>,
}

/// Some servers send numeric codes, others strings.
fn code_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_ollama_completion() {
        let body = r#"{
            "id": "chatcmpl-412",
            "object": "chat.completion",
            "created": 1733000000,
            "model": "gemma3:4b",
            "system_fingerprint": "fp_ollama",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello! I can see your message."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 26, "completion_tokens": 9, "total_tokens": 35}
        }"#;

        let parsed: OpenAIChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.model.as_deref(), Some("gemma3:4b"));
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Hello! I can see your message.")
        );
        assert_eq!(parsed.usage.unwrap().total_tokens, 35);
    }

    #[test]
    fn missing_choices_is_rejected() {
        assert!(serde_json::from_str::<OpenAIChatResponse>(r#"{"id":"x"}"#).is_err());
    }

    #[test]
    fn error_code_may_be_numeric() {
        let parsed: OpenAIErrorResponse =
            serde_json::from_str(r#"{"error":{"message":"boom","code":500}}"#).unwrap();
        assert_eq!(parsed.error.code.as_deref(), Some("500"));
        assert!(parsed.error.error_type.is_none());
    }
}
