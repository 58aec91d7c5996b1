//! Sound signals for the clock.
//!
//! The engine emits two fire-and-forget signals:
//!
//! - `notify`: three descending beeps when a countdown reaches zero
//! - `click`: a short transient on every digit adjustment
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   SoundSignal    │ ← Trait the engine calls
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │ RodioSoundSignal │────▶│    ToneSource    │
//! │                  │     │ (chirp synthesis)│
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use stageclock::sound::{RodioSoundSignal, SoundSignal};
//!
//! let signal = RodioSoundSignal::new(false).expect("audio init");
//! signal.notify().expect("playback failed");
//! ```

mod error;
mod player;
pub mod synth;

pub use error::SoundError;
pub use player::{try_create_signal, RodioSoundSignal};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Consumer of the clock's audio signals.
///
/// Implementations should be non-blocking. Errors are logged by the engine
/// and never change timer state.
pub trait SoundSignal {
    /// Countdown completion chime.
    fn notify(&self) -> Result<(), SoundError>;

    /// Digit adjustment click.
    fn click(&self) -> Result<(), SoundError>;

    /// Returns true if playback is disabled.
    fn is_disabled(&self) -> bool;
}

impl SoundSignal for RodioSoundSignal {
    fn notify(&self) -> Result<(), SoundError> {
        self.play_chime()
    }

    fn click(&self) -> Result<(), SoundError> {
        self.play_click()
    }

    fn is_disabled(&self) -> bool {
        RodioSoundSignal::is_disabled(self)
    }
}

/// Mock sound signal for testing.
#[derive(Debug, Default)]
pub struct MockSoundSignal {
    notify_calls: AtomicUsize,
    click_calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockSoundSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn notify_count(&self) -> usize {
        self.notify_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn click_count(&self) -> usize {
        self.click_calls.load(Ordering::SeqCst)
    }

    pub fn clear_calls(&self) {
        self.notify_calls.store(0, Ordering::SeqCst);
        self.click_calls.store(0, Ordering::SeqCst);
    }

    fn record(&self, counter: &AtomicUsize) -> Result<(), SoundError> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        Ok(())
    }
}

impl SoundSignal for MockSoundSignal {
    fn notify(&self) -> Result<(), SoundError> {
        self.record(&self.notify_calls)
    }

    fn click(&self) -> Result<(), SoundError> {
        self.record(&self.click_calls)
    }

    fn is_disabled(&self) -> bool {
        false
    }
}
