//! Screen regions shared by the renderer and mouse hit-testing.

use std::ops::Range;

use ratatui::layout::{self, Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use rewind_tictactoe::Position;

/// Width of one board cell.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell.
pub const CELL_HEIGHT: u16 = 3;
/// Grid width including the two separator columns.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Grid height including the two separator rows.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
/// Smallest terminal width that fits the board and the history panel.
pub const MIN_WIDTH: u16 = GRID_WIDTH + 6 + 24;
/// Smallest terminal height that fits the board unclipped.
pub const MIN_HEIGHT: u16 = 3 + GRID_HEIGHT + 4 + 3;

/// Every region drawn on screen for a given terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Outer board panel.
    pub board_panel: Rect,
    /// Status line inside the board panel.
    pub status: Rect,
    /// The 3x3 grid.
    pub grid: Rect,
    /// One rect per square, in index order. Clipped to the grid.
    pub cells: [Rect; 9],
    /// Current-move line (with border).
    pub move_line: Rect,
    /// History panel (with border).
    pub history: Rect,
    /// Rows available for history entries.
    pub history_rows: Rect,
    /// Key help footer.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GRID_WIDTH + 6), Constraint::Min(0)])
            .split(chunks[1]);

        let board_panel = body[0];
        let board_inner = Block::bordered().inner(board_panel);
        let board_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status
                Constraint::Length(1),
                Constraint::Min(0), // Grid
            ])
            .split(board_inner);

        let grid = center_rect(board_rows[2], GRID_WIDTH, GRID_HEIGHT);
        let cells = Position::ALL.map(|pos| cell_rect(grid, pos));

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(body[1]);

        Self {
            title: chunks[0],
            board_panel,
            status: board_rows[0],
            grid,
            cells,
            move_line: info[0],
            history: info[1],
            history_rows: Block::bordered().inner(info[1]),
            help: chunks[2],
        }
    }

    /// Square under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = layout::Position::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
    }

    /// History entry under the given coordinates, for the visible `window`.
    pub fn history_entry_at(&self, column: u16, row: u16, window: Range<usize>) -> Option<usize> {
        if !self.history_rows.contains(layout::Position::new(column, row)) {
            return None;
        }
        let index = window.start + usize::from(row - self.history_rows.y);
        window.contains(&index).then_some(index)
    }

    /// Whether `area` is large enough to draw without clipping.
    pub fn fits(area: Rect) -> bool {
        area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
    }

    /// Number of history entries that fit on screen.
    pub fn history_capacity(&self) -> usize {
        usize::from(self.history_rows.height)
    }
}

/// Range of history entries to show so that `selected` stays visible.
pub fn history_window(len: usize, selected: usize, rows: usize) -> Range<usize> {
    if rows == 0 || len == 0 {
        return 0..0;
    }
    let selected = selected.min(len - 1);
    let start = (selected + 1).saturating_sub(rows);
    start..(start + rows).min(len)
}

fn cell_rect(grid: Rect, pos: Position) -> Rect {
    let col = pos.col() as u16;
    let row = pos.row() as u16;
    Rect::new(
        grid.x + col * (CELL_WIDTH + 1),
        grid.y + row * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
    .intersection(grid)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height).intersection(area)
}
