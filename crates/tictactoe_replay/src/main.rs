//! tictactoe_replay - replay a scripted match and print the result.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_replay::{MatchScript, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(script = %cli.script.display(), "Starting replay");

    let script = MatchScript::from_file(&cli.script)
        .with_context(|| format!("loading {}", cli.script.display()))?;
    let report = run(&script);

    if cli.quiet {
        println!("{}", report.summary());
    } else {
        println!("{}", report);
    }

    Ok(())
}
