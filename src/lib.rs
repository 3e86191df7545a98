//! Rewind - terminal tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Game logic**: the [`rewind_tictactoe`] crate (board, rules, history)
//! - **TUI**: ratatui front end with keyboard and mouse input
//! - **Replay**: prints the game reached by a sequence of clicks
//! - **Config**: optional TOML settings
//!
//! # Example
//!
//! ```
//! use rewind_games::{parse_square, replay_game, transcript};
//!
//! let moves: Vec<_> = ["0", "center", "1", "5", "top-right"]
//!     .into_iter()
//!     .map(|s| parse_square(s).unwrap())
//!     .collect();
//! let game = replay_game(&moves, None).unwrap();
//! assert!(transcript(&game).contains("Winner: X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Settings
pub use config::{ConfigError, Settings};

// Crate-level exports - Replay
pub use replay::{ReplayError, parse_square, replay_game, transcript};

// Crate-level exports - Game types
pub use rewind_tictactoe::{
    Board, BoardView, ClickOutcome, Game, HistoryError, IgnoreReason, MoveEntry, Player, Position,
    Square, Status,
};
