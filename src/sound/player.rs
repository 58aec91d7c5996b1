//! Sound signal implementation using rodio.
//!
//! This module provides the `RodioSoundSignal` which plays synthesized
//! chime and click tones through the rodio v0.20 audio library.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;
use super::synth::{self, Chirp, ToneSource};

/// A sound signal that synthesizes tones and plays them with rodio.
///
/// Playback is non-blocking; tones continue playing in the background.
pub struct RodioSoundSignal {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// Whether playback is disabled.
    disabled: AtomicBool,
}

impl RodioSoundSignal {
    /// Opens the default audio output.
    ///
    /// # Arguments
    ///
    /// * `disabled` - If true, all signals are silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            disabled: AtomicBool::new(disabled),
        })
    }

    /// Plays the completion chime.
    pub fn play_chime(&self) -> Result<(), SoundError> {
        self.play_tone("chime", synth::chime())
    }

    /// Plays the edit click.
    pub fn play_click(&self) -> Result<(), SoundError> {
        self.play_tone("click", synth::click())
    }

    fn play_tone(&self, name: &str, chirps: Vec<Chirp>) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            debug!(tone = name, "Sound playback disabled, skipping");
            return Ok(());
        }

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        sink.append(ToneSource::new(chirps));
        sink.detach();

        debug!(tone = name, "Tone playback started (detached)");
        Ok(())
    }

    /// Returns true if playback is currently disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for RodioSoundSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundSignal")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Opens the audio output, returning None if it is unavailable.
///
/// With `disabled` set the device is never opened. If audio initialization
/// fails, a warning is logged and the clock runs silently.
#[must_use]
pub fn try_create_signal(disabled: bool) -> Option<Arc<RodioSoundSignal>> {
    if disabled {
        debug!("Sound disabled, audio output not opened");
        return None;
    }
    match RodioSoundSignal::new(disabled) {
        Ok(signal) => Some(Arc::new(signal)),
        Err(e) => {
            warn!("Audio not available, sound disabled: {} ({})", e, e.suggestion());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Audio hardware is usually missing in CI containers; each test bails
    // out early when the output stream cannot be opened.

    #[test]
    fn test_disabled_signal_skips_playback() {
        let signal = match RodioSoundSignal::new(true) {
            Ok(s) => s,
            Err(_) => return,
        };

        assert!(signal.is_disabled());
        assert!(signal.play_chime().is_ok());
        assert!(signal.play_click().is_ok());
    }

    #[test]
    fn test_disabled_signal_skips_device() {
        assert!(try_create_signal(true).is_none());
    }

    #[test]
    fn test_try_create_signal_does_not_panic() {
        let _ = try_create_signal(false);
    }

    #[test]
    fn test_debug_impl() {
        let signal = match RodioSoundSignal::new(true) {
            Ok(s) => s,
            Err(_) => return,
        };

        let debug_str = format!("{:?}", signal);
        assert!(debug_str.contains("RodioSoundSignal"));
    }
}
