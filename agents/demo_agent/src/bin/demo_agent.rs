//! Demo Agent CLI - run the Pokemon Gym agent against one prompt.

#![allow(clippy::print_stdout)] // CLI program intentionally uses stdout

use std::process::ExitCode;

use clap::Parser;
use demo_agent::{AIServerAgent, AgentConfig};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Build the Pokemon Gym agent and send it a single prompt
#[derive(Parser)]
#[command(name = "demo-agent")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Backend provider (ollama, openai, openrouter, lmstudio)
    #[arg(short, long, default_value = "ollama")]
    provider: String,

    /// Model name to use
    #[arg(short, long, default_value = "gemma3:4b")]
    model: String,

    /// Prompt to send
    #[arg(long, default_value = "You are standing in Pallet Town. What do you do first?")]
    prompt: String,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "demo_agent={level},pokegym={level},{}",
            if verbosity >= 2 { "debug" } else { "warn" }
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> demo_agent::Result<()> {
    let mut config = AgentConfig::new(cli.provider, cli.model);
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(secs);
    }

    let agent = AIServerAgent::from_config(config)?;
    println!(
        "Agent ready: {} / {} at {}",
        agent.provider(),
        agent.model_name(),
        agent.base_url()
    );

    let reply = agent.ask(&cli.prompt).await?;
    println!("{reply}");
    Ok(())
}
