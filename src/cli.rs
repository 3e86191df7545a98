//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Position;
use std::path::PathBuf;

use crate::replay::parse_square;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Write logs here instead of the configured log file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the game reached by clicking the given squares in order
    Replay {
        /// Squares to click in order: an index (0-8, row-major) or a label such as `center`
        #[arg(value_parser = parse_square)]
        moves: Vec<Position>,

        /// Move number to view after the clicks
        #[arg(long)]
        jump: Option<usize>,
    },
}
