use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Where key presses come from. The bounded wait in `next_key` is the only
/// place the UI loop blocks.
pub trait KeySource {
    /// Wait up to `timeout` for a key press. `Ok(None)` on timeout or on
    /// any non-key event (resize, focus, ...).
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>>;
}

/// Keys read from the real terminal through crossterm
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            // On Windows, crossterm fires Press and Release; only handle Press
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            // Resize is picked up by the next draw
            _ => Ok(None),
        }
    }
}

/// Handle a single key input event.
pub fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        // Raw mode swallows SIGINT, so honour Ctrl-C here
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        _ => {}
    }
}
