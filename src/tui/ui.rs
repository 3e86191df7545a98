//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square, Status};

use super::app::{App, Focus};
use super::layout::{CELL_HEIGHT, CELL_WIDTH, GRID_WIDTH, MIN_HEIGHT, MIN_WIDTH, ScreenLayout};

const HELP: &str =
    "1-9/click: play  Tab: switch pane  ←↑↓→: move  Enter: select  Home/End: jump  n: new  q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if !ScreenLayout::fits(area) {
        let msg = format!("Terminal too small: need {}x{}", MIN_WIDTH, MIN_HEIGHT);
        frame.render_widget(Paragraph::new(msg).style(Style::default().fg(Color::Yellow)), area);
        return;
    }
    let layout = ScreenLayout::new(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app);
    draw_info(frame, &layout, app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, layout.help);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::bordered()
        .title(title)
        .border_style(Style::default().fg(border))
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let game = app.game();
    let view = game.board_view();

    frame.render_widget(panel("Board", *app.focus() == Focus::Board), layout.board_panel);

    let status = view.status();
    let status_style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    frame.render_widget(
        Paragraph::new(status.to_string())
            .style(status_style)
            .alignment(Alignment::Center),
        layout.status,
    );

    let winning = view.winning_line();
    for pos in Position::ALL {
        let cursor = *app.focus() == Focus::Board && pos == *app.cursor();
        let highlight = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(
            frame,
            layout.cells[pos.to_index()],
            pos,
            view.squares().get(pos),
            CellStyle {
                cursor,
                highlight,
                show_hint: *app.show_hints(),
            },
        );
    }
    draw_separators(frame, layout.grid);
}

/// Per-cell rendering flags.
#[derive(Debug, Clone, Copy)]
struct CellStyle {
    cursor: bool,
    highlight: bool,
    show_hint: bool,
}

/// Draws one square: its mark, or its key hint when empty.
fn draw_cell(frame: &mut Frame, area: Rect, pos: Position, square: Square, flags: CellStyle) {
    let (symbol, mut style) = match square {
        Square::Empty if flags.show_hint => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default().fg(mark_color(player)).add_modifier(Modifier::BOLD),
        ),
    };

    if flags.highlight {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if flags.cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let mut lines = vec![Line::default(); usize::from(CELL_HEIGHT)];
    lines[usize::from(CELL_HEIGHT / 2)] = Line::from(Span::raw(symbol));
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn draw_separators(frame: &mut Frame, grid: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    let cell = "─".repeat(usize::from(CELL_WIDTH));
    let line = format!("{cell}┼{cell}┼{cell}");

    for row in 0..3u16 {
        let y = grid.y + row * (CELL_HEIGHT + 1);
        for col in 1..3u16 {
            let x = grid.x + col * (CELL_WIDTH + 1) - 1;
            let area = Rect::new(x, y, 1, CELL_HEIGHT).intersection(grid);
            let bar = vec![Line::from("│"); usize::from(CELL_HEIGHT)];
            frame.render_widget(Paragraph::new(bar).style(style), area);
        }
        if row < 2 {
            let area = Rect::new(grid.x, y + CELL_HEIGHT, GRID_WIDTH, 1).intersection(grid);
            frame.render_widget(Paragraph::new(line.as_str()).style(style), area);
        }
    }
}

fn draw_info(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let game = app.game();

    let move_line = Paragraph::new(game.current_move_text())
        .style(Style::default().fg(Color::White))
        .block(Block::bordered());
    frame.render_widget(move_line, layout.move_line);

    let window = app.visible_history();
    let history_focused = *app.focus() == Focus::History;
    let lines: Vec<Line> = game
        .moves()
        .skip(window.start)
        .take(window.len())
        .map(|entry| {
            let marker = if entry.is_current() { "● " } else { "  " };
            let mut style = if entry.is_current() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if history_focused && entry.index() == *app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("{}. {}", entry.index() + 1, entry.description()),
                    style,
                ),
            ])
        })
        .collect();

    let history = Paragraph::new(lines).block(panel("History", history_focused));
    frame.render_widget(history, layout.history);
}
