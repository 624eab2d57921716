//! Ollama smoke check CLI.
//!
//! Verifies that Ollama answers on its OpenAI-compatible API and that the
//! Pokemon Gym agent can be built for it. Exits with status 1 if either fails.

use std::process::ExitCode;

use clap::Parser;
use pokegym_smoke::{SmokeConfig, run_checks};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Check that Ollama and the Pokemon Gym agent are ready
#[derive(Parser)]
#[command(name = "ollama-smoke")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Ollama base URL (overrides OLLAMA_BASE_URL; empty is ignored)
    #[arg(long)]
    base_url: Option<String>,

    /// Model to check
    #[arg(short, long)]
    model: Option<String>,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = SmokeConfig::from_env();
    if let Some(url) = cli.base_url.filter(|u| !u.is_empty()) {
        config = config.with_base_url(url);
    }
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(secs);
    }
    tracing::debug!(?config, "resolved configuration");

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout();
    match rt.block_on(run_checks(&config, &mut stdout)) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("failed to write report: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
///
/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ollama_smoke={level},pokegym_smoke={level},pokegym={level},demo_agent={level},{}",
            if verbosity >= 2 { "debug" } else { "warn" }
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}
