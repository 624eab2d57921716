//! LLM backend implementations.
//!
//! Every provider in [`crate::provider::Provider`] speaks the OpenAI wire
//! format, so a single client covers all of them.

pub mod openai;

pub use openai::{OpenAI, OpenAIConfig};
