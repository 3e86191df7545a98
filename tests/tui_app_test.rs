//! Tests for the terminal front end: input routing and rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use rewind_games::tui::{App, AppAction, Focus, draw};
use rewind_games::{Player, Position, Settings, Square, Status};

fn app() -> App {
    let mut app = App::new(&Settings::default());
    app.resize(Rect::new(0, 0, 80, 24));
    app
}

fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            app.resize(f.area());
            draw(f, app);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn click_cell(app: &mut App, index: usize) {
    let cell = app.layout().cells[index];
    let action = app.handle_mouse(left_click(cell.x + cell.width / 2, cell.y + cell.height / 2));
    assert_eq!(action, AppAction::Continue);
}

fn press(app: &mut App, code: KeyCode) -> AppAction {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_initial_screen() {
    let mut app = app();
    let screen = render(&mut app, 80, 24);
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("You are at move #0"));
    assert!(screen.contains("1. Go to game start"));
    assert!(!screen.contains("Go to move #1"));
}

#[test]
fn test_mouse_win_then_ignored_clicks() {
    let mut app = app();
    for i in [0, 4, 1, 5, 2] {
        click_cell(&mut app, i);
    }
    assert_eq!(app.game().status(), Status::Winner(Player::X));

    let board = app.game().current_squares().clone();
    for i in [3, 6, 7, 8] {
        click_cell(&mut app, i);
    }
    assert_eq!(app.game().current_squares(), &board);

    let screen = render(&mut app, 80, 24);
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("You are at move #5"));
    assert!(screen.contains("6. Go to move #5"));
}

#[test]
fn test_mouse_history_jump_then_play_truncates() {
    let mut app = app();
    for i in [0, 4, 8] {
        click_cell(&mut app, i);
    }
    let rows = app.layout().history_rows;
    app.handle_mouse(left_click(rows.x + 2, rows.y));
    assert_eq!(app.game().current_move(), 0);
    assert_eq!(*app.focus(), Focus::History);
    assert_eq!(app.game().history().len(), 4);

    click_cell(&mut app, 2);
    assert_eq!(app.game().history().len(), 2);
    assert_eq!(
        app.game().current_squares().get(Position::TopRight),
        Square::Occupied(Player::X)
    );

    let screen = render(&mut app, 80, 24);
    assert!(screen.contains("2. Go to move #1"));
    assert!(!screen.contains("Go to move #2"));
}

#[test]
fn test_keyboard_cursor_plays_at_cursor() {
    let mut app = app();
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Left);
    assert_eq!(*app.cursor(), Position::TopLeft);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.game().current_squares().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    // Same square again is a no-op.
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.game().current_move(), 1);
}

#[test]
fn test_draw_keeps_next_player_status() {
    let mut app = app();
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.game().current_move(), 9);
    let screen = render(&mut app, 80, 24);
    assert!(screen.contains("Next player: O"));
    assert!(screen.contains("You are at move #9"));
}

#[test]
fn test_small_terminal_shows_notice_and_ignores_mouse() {
    let mut app = app();
    let screen = render(&mut app, 30, 10);
    assert!(screen.contains("Terminal too small"));

    app.handle_mouse(left_click(5, 5));
    assert_eq!(app.game().current_move(), 0);
}

/// Text inside the board grid after the last render.
fn grid_text(app: &App, screen: &str) -> String {
    let grid = app.layout().grid;
    screen
        .lines()
        .skip(grid.y as usize)
        .take(grid.height as usize)
        .flat_map(|line| line.chars().skip(grid.x as usize).take(grid.width as usize))
        .collect()
}

#[test]
fn test_hints_can_be_disabled() {
    let settings = Settings::from_toml("show_hints = false").unwrap();
    let mut app = App::new(&settings);
    let screen = render(&mut app, 80, 24);
    assert!(!grid_text(&app, &screen).contains('5'));

    let mut app = self::app();
    let screen = render(&mut app, 80, 24);
    assert!(grid_text(&app, &screen).contains('5'));
}
