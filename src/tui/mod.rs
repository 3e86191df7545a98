//! Terminal UI for rewind.

mod app;
mod input;
mod layout;
mod ui;

pub use app::{App, AppAction, Focus};
pub use input::{digit_square, move_cursor};
pub use layout::{ScreenLayout, history_window};
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

use crate::Settings;

/// Sends logs to the configured file so they do not corrupt the screen.
fn init_file_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Leaves raw mode, the alternate screen and mouse capture when dropped.
///
/// Create it right after raw mode is enabled.
struct TerminalGuard<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out, active: true }
    }

    /// Restores the terminal once; later calls do nothing.
    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        // Keep going after a raw mode failure so the screen is still restored.
        let raw = disable_raw_mode();
        execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show)?;
        raw
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Runs the interactive game until the user quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    init_file_logging(settings)?;
    info!("Starting Rewind TUI");

    enable_raw_mode()?;
    let mut guard = TerminalGuard::new(io::stdout());
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    let res = run_app(&mut terminal, &mut app, settings.tick());
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    restored.context("Failed to restore terminal")?;
    info!(moves = app.game().history().len() - 1, "Rewind TUI closed");
    res
}

/// Draw, wait for one event, handle it; repeat until quit.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick: Duration) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| {
            app.resize(f.area());
            draw(f, app);
        })?;

        if !event::poll(tick)? {
            continue;
        }
        let action = match event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => AppAction::Continue,
        };
        if action == AppAction::Quit {
            return Ok(());
        }
    }
}
