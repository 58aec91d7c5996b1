//! Display mode control.
//!
//! The engine forwards the fullscreen key to a [`DisplayController`] and
//! forgets about it: failures are logged, never surfaced as clock state.
//!
//! # Example
//!
//! ```no_run
//! use stageclock::display::{DisplayController, TerminalDisplay};
//!
//! let display = TerminalDisplay::new();
//! if let Err(e) = display.toggle_fullscreen() {
//!     eprintln!("fullscreen failed: {e} ({})", e.suggestion());
//! }
//! ```

pub mod error;
pub mod terminal;

pub use error::DisplayError;
pub use terminal::TerminalDisplay;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// External fullscreen capability.
pub trait DisplayController {
    /// Enters fullscreen if not active, exits if active.
    fn toggle_fullscreen(&self) -> Result<(), DisplayError>;

    /// Returns true while fullscreen is active.
    fn is_fullscreen(&self) -> bool;
}

/// Mock display controller for testing.
#[derive(Debug, Default)]
pub struct MockDisplayController {
    toggle_calls: AtomicUsize,
    fullscreen: AtomicBool,
    should_fail: AtomicBool,
}

impl MockDisplayController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn toggle_count(&self) -> usize {
        self.toggle_calls.load(Ordering::SeqCst)
    }
}

impl DisplayController for MockDisplayController {
    fn toggle_fullscreen(&self) -> Result<(), DisplayError> {
        self.toggle_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DisplayError::Unsupported("simulated failure".to_string()));
        }
        self.fullscreen.fetch_xor(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen.load(Ordering::SeqCst)
    }
}
