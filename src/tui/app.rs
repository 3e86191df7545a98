//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use rewind_tictactoe::{ClickOutcome, Game, Position};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_square, move_cursor};
use super::layout::{ScreenLayout, history_window};
use crate::Settings;

/// Pane receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// The [`Game`] is the only source of truth for the board; everything else
/// here is cursor and focus state for the terminal.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    /// Highlighted entry in the move list.
    selected: usize,
    show_hints: bool,
    /// Last drawn terminal area, used for mouse hit-testing.
    area: Rect,
}

impl App {
    /// Creates a new application at the start of a fresh game.
    pub fn new(settings: &Settings) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            show_hints: *settings.show_hints(),
            area: Rect::default(),
        }
    }

    /// Records the size of the frame about to be drawn.
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    /// Regions for the current terminal size.
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.area)
    }

    /// History entries currently visible.
    pub fn visible_history(&self) -> std::ops::Range<usize> {
        history_window(
            self.game.history().len(),
            self.selected,
            self.layout().history_capacity(),
        )
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if let Some(pos) = digit_square(key.code) {
            self.activate_cell(pos);
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Home => self.jump_to(0),
            KeyCode::End => self.jump_to(self.game.latest_move()),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.activate_cell(self.cursor),
                Focus::History => self.jump_to(self.selected),
            },
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, code),
                    Focus::History => self.move_selection(code),
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Handles a mouse event; only left clicks do anything.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !ScreenLayout::fits(self.area) {
            return AppAction::Continue;
        }

        let layout = self.layout();
        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.activate_cell(pos);
        } else if let Some(index) =
            layout.history_entry_at(mouse.column, mouse.row, self.visible_history())
        {
            self.focus = Focus::History;
            self.jump_to(index);
        }
        AppAction::Continue
    }

    /// Clicks a square on the viewed board.
    #[instrument(skip(self))]
    pub fn activate_cell(&mut self, pos: Position) {
        match self.game.click(pos) {
            ClickOutcome::Play(_) => {
                self.selected = self.game.current_move();
                debug!(current_move = self.selected, "Move played");
            }
            ClickOutcome::Ignored(reason) => debug!(%reason, "Click ignored"),
        }
    }

    /// Views move `index`; out-of-range requests are logged and dropped.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => self.selected = index,
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    /// Throws the game away and starts over.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.game = Game::new();
        self.selected = 0;
        self.cursor = Position::Center;
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.latest_move();
        self.selected = match key {
            KeyCode::Up | KeyCode::Left => self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Right => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }
}
