//! Stageclock Library
//!
//! This library provides the core functionality for the stageclock CLI.
//! It includes:
//! - Clock engine with countdown/stopwatch transitions and its timers
//! - Scheduler abstraction with a tokio implementation and a virtual clock
//! - Keyboard mapping and crossterm event translation
//! - Terminal renderer for the big-digit clock face
//! - Synthesized chime and click sounds
//! - Alternate-screen fullscreen control
//! - CLI command parsing and the terminal host loop

pub mod cli;
pub mod display;
pub mod engine;
pub mod input;
pub mod sound;
pub mod types;
pub mod ui;

// Re-export commonly used types for convenience
pub use types::{
    format_time, ClockConfig, ClockState, EditScope, Theme, TickOutcome, TimerMode,
    TimerSnapshot, FONTS, THEMES,
};

pub use engine::{
    CancelToken, Dispatch, Fired, ManualScheduler, Scheduler, TimerEngine, TimerKind,
    TokioScheduler,
};

pub use input::{map_key, Command, InputEvent, Key};

// Re-export sound types
pub use sound::{try_create_signal, MockSoundSignal, RodioSoundSignal, SoundError, SoundSignal};

// Re-export display types
pub use display::{DisplayController, DisplayError, MockDisplayController, TerminalDisplay};
