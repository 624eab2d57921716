//! Pokegym - the language-model plumbing behind the Pokemon Gym agent.
//!
//! This crate provides a small OpenAI-compatible chat client, the provider
//! table used to reach Ollama and hosted backends, and the error types the
//! agent and the integration checks share.

pub mod chat;
pub mod error;
pub mod llms;
pub mod message;
pub mod prelude;
pub mod provider;
pub mod usage;

pub use error::{Error, LlmError, Result};
