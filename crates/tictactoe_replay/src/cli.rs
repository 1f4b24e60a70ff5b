//! Command-line interface for tictactoe_replay.

use clap::Parser;
use std::path::PathBuf;

/// Replay a scripted tic-tac-toe match through the rules engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Replay a scripted tic-tac-toe match", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML match script
    pub script: PathBuf,

    /// Print only the final outcome line
    #[arg(short, long)]
    pub quiet: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
