use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cron_expand::{printer, ParsedResult};

/// Expand a standard six-field cron expression into its concrete values
#[derive(Parser)]
#[command(name = "cron-expand", version, about)]
struct Cli {
    /// Cron expression: "minute hour day-of-month month day-of-week command"
    expression: String,

    /// Emit the expansion as JSON instead of an aligned table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let parsed = ParsedResult::parse(&cli.expression)
        .with_context(|| format!("failed to parse '{}'", cli.expression))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("{}", printer::render(&parsed));
    }

    Ok(())
}
