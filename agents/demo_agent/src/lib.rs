//! The AI server agent for Pokemon Gym.
//!
//! [`AIServerAgent`] drives the game through a language model reached over
//! an OpenAI-compatible API. Which backend it talks to is chosen by a
//! provider name (`ollama`, `openai`, ...) and a model name.

mod agent;
mod config;
mod error;

pub use agent::AIServerAgent;
pub use config::AgentConfig;
pub use error::{AgentError, Result};
