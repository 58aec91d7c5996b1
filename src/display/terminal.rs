//! Fullscreen control for terminal hosts.
//!
//! A terminal has no window to maximize; "fullscreen" here means the
//! alternate screen, which hides the shell scrollback behind the clock.

use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use tracing::debug;

use super::error::DisplayError;
use super::DisplayController;

/// Alternate-screen display controller writing to stdout.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    fullscreen: AtomicBool,
}

impl TerminalDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the alternate screen if not already there.
    pub fn enter(&self) -> Result<(), DisplayError> {
        if self.fullscreen.load(Ordering::SeqCst) {
            return Ok(());
        }
        Self::ensure_terminal()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.fullscreen.store(true, Ordering::SeqCst);
        debug!("Entered alternate screen");
        Ok(())
    }

    /// Leaves the alternate screen if currently there.
    pub fn leave(&self) -> Result<(), DisplayError> {
        if !self.fullscreen.load(Ordering::SeqCst) {
            return Ok(());
        }
        execute!(io::stdout(), LeaveAlternateScreen)?;
        io::stdout().flush()?;
        self.fullscreen.store(false, Ordering::SeqCst);
        debug!("Left alternate screen");
        Ok(())
    }

    fn ensure_terminal() -> Result<(), DisplayError> {
        if io::stdout().is_terminal() {
            Ok(())
        } else {
            Err(DisplayError::Unsupported(
                "stdout is not a terminal".to_string(),
            ))
        }
    }
}

impl DisplayController for TerminalDisplay {
    fn toggle_fullscreen(&self) -> Result<(), DisplayError> {
        if self.is_fullscreen() {
            self.leave()
        } else {
            self.enter()
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen.load(Ordering::SeqCst)
    }
}
