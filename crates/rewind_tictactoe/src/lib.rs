//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Board`] snapshots of [`Square`]s holding [`Player`] marks
//! - **Rules**: win and draw detection over a single snapshot
//! - **Evaluator**: [`BoardView`] turns a click into the next snapshot
//! - **Controller**: [`Game`] owns the history and the viewed move
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Position};
//!
//! let mut game = Game::new();
//! game.click(Position::Center);
//! game.click(Position::TopLeft);
//! game.jump_to(0).unwrap();
//! game.click(Position::BottomRight);
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_view;
mod game;
mod position;
pub mod rules;
mod types;

pub use board_view::{BoardView, ClickOutcome, IgnoreReason, Status};
pub use game::{Game, HistoryError, MoveEntry};
pub use position::Position;
pub use rules::check_winner;
pub use types::{Board, Player, Square};
