//! Terminal presentation layer.
//!
//! Submodules:
//! - `app`    — session-owning application state and the `Action` contract.
//! - `render` — ratatui widgets drawn from an `&App`.
//! - `map`    — map viewport and heatmap colour ramp.

pub mod app;
pub mod map;
pub mod render;

use chrono::Local;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use crate::logging::{self, LogSource};
use crate::model::DashboardError;
use app::{App, action_for_key};

/// Runs the dashboard until the user quits.
///
/// A terminal that cannot enter raw mode is reported as
/// `DashboardError::Terminal`. Once set up, the terminal is restored on
/// every exit path, including errors.
pub fn run(app: &mut App) -> Result<(), DashboardError> {
    let mut terminal = ratatui::try_init()?;
    logging::set_console(false);
    let result = event_loop(&mut terminal, app);
    ratatui::restore();
    // Logged while the console is still off; main reports it on stderr.
    if let Err(ref e) = result {
        logging::error(LogSource::Ui, None, &e.to_string());
    }
    logging::set_console(true);
    result
}

/// Draw, block on the next key, handle it, repeat. Resizes and unbound
/// keys just redraw.
fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<(), DashboardError> {
    app.start(Local::now())?;
    while app.is_running() {
        terminal.draw(|f| render::draw(f, app))?;
        if let Event::Key(key) = event::read()? {
            if let Some(action) = action_for_key(key) {
                app.handle(action, Local::now())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use std::io::IsTerminal;

    /// True when crossterm could find a terminal to put into raw mode.
    fn terminal_available() -> bool {
        std::fs::File::open("/dev/tty").is_ok() || std::io::stdin().is_terminal()
    }

    #[test]
    fn test_run_without_terminal_returns_terminal_error() {
        if terminal_available() {
            // Would take over the developer's terminal and block on input.
            return;
        }
        let mut app = App::new(DashboardConfig {
            seed: Some(1),
            ..DashboardConfig::default()
        });
        let result = run(&mut app);
        assert!(
            matches!(result, Err(DashboardError::Terminal(_))),
            "setup without a tty should be a Terminal error, got {:?}",
            result
        );
        assert!(app.is_running(), "nothing should have been handled");
    }
}
