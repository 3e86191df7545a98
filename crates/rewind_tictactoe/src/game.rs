//! Game controller: move history, the viewed move, and time travel.

use crate::board_view::{BoardView, ClickOutcome, Status};
use crate::{Board, Player, Position};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Error returned when jumping outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested move index does not exist.
    #[display("Move #{} is out of range (history has {} entries)", requested, len)]
    OutOfRange {
        /// Requested move index.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    index: usize,
    current: bool,
}

impl MoveEntry {
    /// Move index this entry jumps to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this is the move currently on screen.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Button label for this entry.
    pub fn description(&self) -> String {
        if self.index > 0 {
            format!("Go to move #{}", self.index)
        } else {
            "Go to game start".to_string()
        }
    }
}

/// Tic-tac-toe game with full history.
///
/// `history[0]` is always the empty board. Each later entry adds exactly one
/// mark to its predecessor. `current_move` selects the snapshot on screen and
/// its parity decides whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
}

impl Game {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// All recorded snapshots.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot on screen.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Whether X moves next, from the parity of the viewed move.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The player who moves next.
    pub fn to_move(&self) -> Player {
        Player::from_x_is_next(self.x_is_next())
    }

    /// The snapshot on screen.
    pub fn current_squares(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Evaluator for the snapshot on screen.
    pub fn board_view(&self) -> BoardView<'_> {
        BoardView::new(self.current_squares(), self.x_is_next())
    }

    /// Status line for the snapshot on screen.
    pub fn status(&self) -> Status {
        self.board_view().status()
    }

    /// Line describing the viewed move.
    pub fn current_move_text(&self) -> String {
        format!("You are at move #{}", self.current_move)
    }

    /// Records `next_squares` after the viewed move.
    ///
    /// Any snapshots after the viewed move are discarded first.
    #[instrument(skip(self, next_squares), fields(current_move = self.current_move))]
    pub fn play(&mut self, next_squares: Board) {
        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future moves");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next_squares);
        self.current_move = self.history.len() - 1;
        debug!(current_move = self.current_move, "Move recorded");
    }

    /// Shows snapshot `next_move` without changing the history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if no such snapshot exists; the
    /// game is left as it was.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, next_move: usize) -> Result<(), HistoryError> {
        if next_move >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                requested: next_move,
                len: self.history.len(),
            });
        }
        self.current_move = next_move;
        debug!("Jumped");
        Ok(())
    }

    /// Index of the most recent snapshot.
    pub fn latest_move(&self) -> usize {
        self.history.len() - 1
    }

    /// Clicks `pos` on the viewed board and records the result if legal.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        let outcome = self.board_view().handle_click(pos);
        if let ClickOutcome::Play(next) = &outcome {
            self.play(next.clone());
        }
        outcome
    }

    /// Entries for the move list, one per snapshot.
    pub fn moves(&self) -> impl Iterator<Item = MoveEntry> + '_ {
        (0..self.history.len()).map(|index| MoveEntry {
            index,
            current: index == self.current_move,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
