//! Terminal lifecycle and the main loop of the tracker
//!
//! The tracker owns the terminal only while [`TerminalGuard`] is alive: raw
//! mode and the alternate screen are undone when the guard drops, whether the
//! loop ends by quitting, by an error, or by a panic.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::storage::Storage;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Raw-mode terminal on the alternate screen; restored on drop
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Switch the real terminal into tracker mode
    pub fn enter() -> Result<Self> {
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            leave_tracker_mode();
            previous_hook(info);
        }));

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            leave_tracker_mode();
            return Err(e).context("Failed to enter the alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                leave_tracker_mode();
                return Err(e).context("Failed to set up the terminal");
            }
        };

        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        leave_tracker_mode();
    }
}

/// Undo raw mode and leave the alternate screen; safe to call twice
fn leave_tracker_mode() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run the interactive tracker until the user quits
pub fn run_tui(storage: &Storage, settings: &Settings) -> Result<()> {
    let mut app = App::new(storage, settings);
    let events = EventHandler::default();

    let mut guard = TerminalGuard::enter()?;
    run_app(guard.terminal(), &mut app, || {
        events
            .next()
            .context("Terminal event thread stopped")
    })
}

/// Draw and dispatch events until the app asks to quit
///
/// Generic over the backend and the event source so the loop can be driven
/// without a real terminal.
pub fn run_app<B, F>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: F) -> Result<()>
where
    B: Backend,
    F: FnMut() -> Result<Event>,
{
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &*app))?;

        match next_event()? {
            Event::Tick => app.notifications.remove_expired(),
            event => handle_event(app, event)?,
        }
    }

    Ok(())
}
