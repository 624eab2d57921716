//! Pokemon Gym Ollama smoke check.
//!
//! Runs two independent checks and reports them in plain text:
//!
//! 1. the Ollama server answers a chat completion on its OpenAI-compatible API;
//! 2. the Pokemon Gym agent can be constructed for the Ollama provider.
//!
//! [`run_checks`] drives both and returns whether everything passed; the
//! `ollama-smoke` binary turns that into the process exit code.

pub mod checks;
pub mod config;
mod runner;

pub use checks::CheckOutcome;
pub use config::SmokeConfig;
pub use runner::run_checks;
