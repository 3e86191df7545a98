//! Board evaluator: a read-only view of one snapshot plus whose turn it is.

use crate::rules::{check_winner, winning_line};
use crate::{Board, Player, Position};
use tracing::{debug, instrument};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// A line has been completed.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No winner yet (this includes a full, drawn board).
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Why a click did not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The square already holds a mark.
    #[display("square is already occupied")]
    Occupied,
    /// Somebody has already won on this board.
    #[display("game is already won")]
    GameOver,
}

/// Result of clicking a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was legal; carries the board after the move.
    Play(Board),
    /// The click was a no-op.
    Ignored(IgnoreReason),
}

/// Borrowed view handed down from the game controller.
///
/// The view never stores state of its own: clicks are turned into a new
/// board that the caller decides what to do with.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    squares: &'a Board,
    x_is_next: bool,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `squares` where `x_is_next` decides the next mark.
    pub fn new(squares: &'a Board, x_is_next: bool) -> Self {
        Self { squares, x_is_next }
    }

    /// The board being viewed.
    pub fn squares(&self) -> &'a Board {
        self.squares
    }

    /// Whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The winner on this board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.squares)
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.squares)
    }

    /// Current status line.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(Player::from_x_is_next(self.x_is_next)),
        }
    }

    /// Handles a click on `pos`.
    ///
    /// Occupied squares and already-won boards are ignored. Otherwise the
    /// board is cloned and the mark chosen by `x_is_next` is placed.
    #[instrument(skip(self), fields(x_is_next = self.x_is_next))]
    pub fn handle_click(&self, pos: Position) -> ClickOutcome {
        if !self.squares.is_empty(pos) {
            debug!("Click on occupied square ignored");
            return ClickOutcome::Ignored(IgnoreReason::Occupied);
        }
        if self.winner().is_some() {
            debug!("Click after game over ignored");
            return ClickOutcome::Ignored(IgnoreReason::GameOver);
        }

        let player = Player::from_x_is_next(self.x_is_next);
        debug!(%player, "Placing mark");
        ClickOutcome::Play(self.squares.with_mark(pos, player))
    }

    /// Callback form of [`handle_click`](Self::handle_click).
    ///
    /// `on_play` runs only for a legal move. Returns whether it ran.
    pub fn handle_click_with(&self, pos: Position, on_play: impl FnOnce(Board)) -> bool {
        match self.handle_click(pos) {
            ClickOutcome::Play(next) => {
                on_play(next);
                true
            }
            ClickOutcome::Ignored(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_click_places_mark_from_flag() {
        let board = Board::new();
        let ClickOutcome::Play(next) = BoardView::new(&board, false).handle_click(Position::Center)
        else {
            panic!("Expected a legal move");
        };
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::O));
        assert!(board.is_empty(Position::Center));
    }

    #[test]
    fn test_click_on_occupied_square_is_ignored() {
        let board = Board::new().with_mark(Position::TopLeft, Player::X);
        let view = BoardView::new(&board, false);
        assert_eq!(
            view.handle_click(Position::TopLeft),
            ClickOutcome::Ignored(IgnoreReason::Occupied)
        );
    }

    #[test]
    fn test_click_after_win_is_ignored() {
        let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .into_iter()
            .fold(Board::new(), |b, pos| b.with_mark(pos, Player::X));
        let view = BoardView::new(&board, false);
        assert_eq!(
            view.handle_click(Position::Center),
            ClickOutcome::Ignored(IgnoreReason::GameOver)
        );
        assert_eq!(view.status(), Status::Winner(Player::X));
        assert_eq!(view.status().to_string(), "Winner: X");
    }

    #[test]
    fn test_callback_only_fires_on_legal_move() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let view = BoardView::new(&board, false);

        let mut played = Vec::new();
        assert!(!view.handle_click_with(Position::Center, |b| played.push(b)));
        assert!(played.is_empty());

        assert!(view.handle_click_with(Position::TopLeft, |b| played.push(b)));
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_status_text() {
        let board = Board::new();
        assert_eq!(BoardView::new(&board, true).status().to_string(), "Next player: X");
        assert_eq!(BoardView::new(&board, false).status().to_string(), "Next player: O");
    }
}
