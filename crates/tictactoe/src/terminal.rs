//! Terminal setup and restore.
//!
//! [`TerminalGuard`] puts the terminal into raw mode with the alternate
//! screen and mouse capture, and undoes all of it when dropped, whichever way
//! the caller exits.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, instrument, warn};

/// Restores the terminal on drop.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enters raw mode, the alternate screen and mouse capture.
    ///
    /// If a later step fails, the guard built so far is dropped and the
    /// terminal restored before the error is returned.
    #[instrument]
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal prepared");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = restore_screen(&mut io::stdout()) {
            warn!(error = %e, "Failed to restore screen");
        }
        debug!("Terminal restored");
    }
}

/// Leaves the alternate screen, stops mouse capture and shows the cursor.
pub fn restore_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_screen_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "{written:?}");
        assert!(written.contains("\x1b[?1000l"), "{written:?}");
        assert!(written.ends_with("\x1b[?25h"), "{written:?}");
    }
}
