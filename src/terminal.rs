//! Scoped terminal session: raw mode + alternate screen on the way in,
//! restored exactly once on the way out, whichever way that is.

use std::io::{self, Stdout};

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

/// Undo whatever terminal setup was done
pub trait Restore {
    fn restore(&mut self) -> io::Result<()>;
}

/// Leaves raw mode and the alternate screen, shows the cursor
pub struct CrosstermRestore;

impl Restore for CrosstermRestore {
    fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
    }
}

pub struct TerminalSession<B: Backend, R: Restore> {
    terminal: Terminal<B>,
    /// Taken on first restore so it can never run twice
    restore: Option<R>,
}

impl TerminalSession<CrosstermBackend<Stdout>, CrosstermRestore> {
    /// Put the real terminal into dashboard mode
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let setup = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
            terminal.clear()?;
            Ok(terminal)
        };

        match setup() {
            Ok(terminal) => Ok(Self::new(terminal, CrosstermRestore)),
            Err(e) => {
                let _ = CrosstermRestore.restore();
                Err(e)
            }
        }
    }
}

impl<B: Backend, R: Restore> TerminalSession<B, R> {
    pub fn new(terminal: Terminal<B>, restore: R) -> Self {
        Self {
            terminal,
            restore: Some(restore),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Restore the terminal now and report failures to the caller
    pub fn close(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(mut restore) => restore.restore(),
            None => Ok(()),
        }
    }
}

impl<B: Backend, R: Restore> Drop for TerminalSession<B, R> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            if let Err(e) = restore.restore() {
                tracing::warn!("failed to restore terminal: {e}");
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use ratatui::backend::TestBackend;

    /// Counts restores instead of touching a terminal
    #[derive(Clone, Default)]
    pub(crate) struct CountingRestore(pub Rc<Cell<u32>>);

    impl Restore for CountingRestore {
        fn restore(&mut self) -> io::Result<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    pub(crate) fn test_session(
        width: u16,
        height: u16,
    ) -> (TerminalSession<TestBackend, CountingRestore>, Rc<Cell<u32>>) {
        let restore = CountingRestore::default();
        let count = Rc::clone(&restore.0);
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        (TerminalSession::new(terminal, restore), count)
    }

    #[test]
    fn close_restores_once() {
        let (session, count) = test_session(10, 5);
        session.close().unwrap();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn drop_restores_once() {
        let (session, count) = test_session(10, 5);
        drop(session);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn early_return_still_restores() {
        fn run(mut session: TerminalSession<TestBackend, CountingRestore>, fail: bool) -> io::Result<()> {
            session.terminal_mut().clear()?;
            if fail {
                return Err(io::Error::other("boom"));
            }
            session.close()
        }

        let (session, count) = test_session(10, 5);
        assert!(run(session, true).is_err());
        assert_eq!(count.get(), 1);

        let (session, count) = test_session(10, 5);
        run(session, false).unwrap();
        assert_eq!(count.get(), 1);
    }
}
