//! Event handling for the TUI
//!
//! A background thread polls crossterm for key presses and resizes and
//! forwards them, together with periodic ticks, over a channel to the
//! main loop.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event; expires toast notifications
    Tick,
}

/// Receiving end of the event thread
pub struct EventHandler {
    receiver: Receiver<Event>,
}

impl EventHandler {
    /// Start the event thread with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || pump_events(&sender, tick_rate));
        Self { receiver }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

/// Forward terminal events until the receiver hangs up or the terminal
/// stops answering
fn pump_events(sender: &Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    // Presses only; release and repeat events are dropped
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(width, height)) => Some(Event::Resize(width, height)),
                    Ok(_) => None,
                    Err(_) => return,
                };

                if let Some(event) = forwarded {
                    if sender.send(event).is_err() {
                        return;
                    }
                }
            }
            Ok(false) => {}
            Err(_) => return,
        }

        if last_tick.elapsed() >= tick_rate {
            if sender.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
