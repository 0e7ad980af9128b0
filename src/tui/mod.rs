//! Interactive terminal UI.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::move_cursor;

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument, warn};

/// Restores the terminal on drop, including while unwinding from a panic.
struct TerminalGuard {
    restore: fn() -> Result<()>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            restore: restore_terminal,
        };
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = (self.restore)() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored when the event loop returns, fails or panics.
#[instrument(skip(config), fields(locale = %config.locale()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(*config.locale());
    let res = run_app(&mut terminal, app);
    drop(guard);

    if let Err(e) = &res {
        error!(error = %e, "Terminal UI failed");
    }
    info!("Terminal UI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    static RESTORED: AtomicBool = AtomicBool::new(false);

    fn record_restore() -> Result<()> {
        RESTORED.store(true, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn test_guard_restores_terminal_when_loop_panics() {
        let outcome = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard {
                restore: record_restore,
            };
            panic!("event loop failed");
        });

        assert!(outcome.is_err());
        assert!(RESTORED.load(Ordering::SeqCst));
    }
}
