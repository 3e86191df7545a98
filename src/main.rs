//! Rewind - Unified CLI
//!
//! Tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind_games::{Cli, Command, Position, Settings, replay_game, transcript, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play { log_file: None }) {
        Command::Play { log_file } => {
            let settings = match log_file {
                Some(path) => settings.with_log_file(path),
                None => settings,
            };
            tui::run_tui(&settings)
        }
        Command::Replay { moves, jump } => run_replay(&settings, &moves, jump),
    }
}

/// Print the transcript for a click sequence
fn run_replay(settings: &Settings, moves: &[Position], jump: Option<usize>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(clicks = moves.len(), "Replaying game");
    let game = replay_game(moves, jump)?;
    print!("{}", transcript(&game));
    Ok(())
}
