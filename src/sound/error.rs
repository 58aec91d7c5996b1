//! Sound system error types.
//!
//! Audio failures never affect the clock; the engine logs them and moves on.

use thiserror::Error;

/// Errors that can occur in the sound signal system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., no speakers connected).
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Failed to create the audio output stream or sink.
    #[error("failed to create audio stream: {0}")]
    StreamError(String),

    /// Generic playback error.
    #[error("sound playback error: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error is related to device availability.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_) | Self::StreamError(_))
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DeviceNotAvailable(_) => "connect an audio output device or pass --no-sound",
            Self::StreamError(_) => "check the system audio configuration",
            Self::PlaybackError(_) => "restart the application",
        }
    }
}
