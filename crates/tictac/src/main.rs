//! Tictac - play tic-tac-toe against a greedy computer opponent.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod prompt;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use tictac_core::Session;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)?.with_overrides(cli.seed, cli.human_marker);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Prompt => run_prompt(&config),
    }
}

/// Run the line-prompt game on stdin/stdout
fn run_prompt(config: &GameConfig) -> Result<()> {
    initialize_tracing(config);
    info!(seed = ?config.seed(), "Starting prompt game");

    let mut session = Session::new(*config.human_marker(), *config.seed());
    let stdin = std::io::stdin();
    prompt::run_prompt(&mut session, stdin.lock(), std::io::stdout())
}

/// Logs go to stderr so they stay out of the game transcript.
#[instrument(skip(config))]
fn initialize_tracing(config: &GameConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
