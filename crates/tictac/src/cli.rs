//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_core::Marker;

/// Tictac - tic-tac-toe against a greedy computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Seed for the computer's random moves
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Marker for the human player (X or O)
    #[arg(long, global = true)]
    pub human_marker: Option<Marker>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI (mouse or keyboard)
    Play,

    /// Play by typing row and column at a prompt
    Prompt,
}
