//! Sequences the checks and writes the report.

use std::io::{self, Write};

use crate::checks::{CheckOutcome, check_agent, check_connectivity};
use crate::config::SmokeConfig;

/// Runs both checks in order, writing the report to `out` as it goes.
///
/// Returns `Ok(true)` only when both checks passed.
///
/// # Errors
///
/// Only fails when writing to `out` fails; check failures are part of the
/// report, not errors.
pub async fn run_checks<W: Write + Send>(config: &SmokeConfig, out: &mut W) -> io::Result<bool> {
    writeln!(out, "Testing Ollama integration with Pokemon Gym...")?;
    writeln!(out)?;

    writeln!(out, "Test 1: Ollama Connection")?;
    out.flush()?;
    let connectivity = check_connectivity(config).await;
    write_outcome(out, &connectivity)?;

    writeln!(out, "Test 2: Pokemon Agent Import")?;
    let agent = check_agent(&config.agent);
    write_outcome(out, &agent)?;

    let all_passed = connectivity.passed && agent.passed;
    if all_passed {
        writeln!(out, "🎉 All tests passed! Ollama integration is working.")?;
        writeln!(out)?;
        writeln!(out, "You can now run:")?;
        writeln!(out, "{}", config.follow_up_command())?;
    } else {
        writeln!(out, "⚠️  Some tests failed. Please check the issues above.")?;
    }
    out.flush()?;

    tracing::info!(
        connectivity = connectivity.passed,
        agent = agent.passed,
        "smoke checks finished"
    );
    Ok(all_passed)
}

fn write_outcome<W: Write>(out: &mut W, outcome: &CheckOutcome) -> io::Result<()> {
    for line in &outcome.lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}
