//! Non-interactive replay of a click sequence.

use derive_more::{Display, Error, From};
use rewind_tictactoe::{ClickOutcome, Game, HistoryError, Position};
use tracing::{debug, instrument};

/// Error raised while replaying clicks.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// Text that names no square.
    #[display("'{}' is not a square (expected 0-8 or a label such as center)", _0)]
    #[from(ignore)]
    InvalidSquare(#[error(not(source))] String),
    /// The requested jump does not exist.
    #[display("{}", _0)]
    History(HistoryError),
}

/// Parses a square given as an index (`4`) or a label (`center`, `top-left`).
pub fn parse_square(s: &str) -> Result<Position, ReplayError> {
    Position::from_label_or_number(s).ok_or_else(|| ReplayError::InvalidSquare(s.to_string()))
}

/// Clicks each square in order on a fresh game, then optionally jumps.
///
/// Clicks the rules ignore are logged and skipped, exactly as in the TUI.
#[instrument]
pub fn replay_game(moves: &[Position], jump: Option<usize>) -> Result<Game, ReplayError> {
    let mut game = Game::new();
    for &pos in moves {
        if let ClickOutcome::Ignored(reason) = game.click(pos) {
            debug!(%pos, %reason, "Click ignored");
        }
    }
    if let Some(target) = jump {
        game.jump_to(target)?;
    }
    Ok(game)
}

/// Renders the viewed board, status, current move and move list as text.
pub fn transcript(game: &Game) -> String {
    let mut out = String::new();
    out.push_str(&game.current_squares().display());
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push('\n');
    out.push_str(&game.current_move_text());
    out.push('\n');
    for entry in game.moves() {
        let marker = if entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.index() + 1, entry.description()));
    }
    out
}
