//! OpenAI-compatible chat client.
//!
//! Talks to any server exposing the Chat Completions route: the hosted
//! OpenAI API, OpenRouter, or a local Ollama / LM Studio instance.

mod chat;
mod client;
mod config;
mod types;

pub use client::OpenAI;
pub use config::OpenAIConfig;
