//! Core data types for the clock.
//!
//! This module defines the data structures used for:
//! - Timer mode and edit scope enums
//! - Presentation option lists (fonts and themes)
//! - Clock configuration with validation
//! - Clock state with its pure transitions
//! - The read-only snapshot consumed by renderers

use serde::{Deserialize, Serialize};

// ============================================================================
// TimerMode
// ============================================================================

/// Whether the clock counts down toward zero or up without bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimerMode {
    /// Time decreases toward zero, then stops and signals completion
    #[default]
    Countdown,
    /// Time increases without bound
    Stopwatch,
}

impl TimerMode {
    /// Returns the label shown in the status line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Countdown => "COUNTDOWN",
            TimerMode::Stopwatch => "STOPWATCH",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            TimerMode::Countdown => TimerMode::Stopwatch,
            TimerMode::Stopwatch => TimerMode::Countdown,
        }
    }
}

// ============================================================================
// EditScope
// ============================================================================

/// Which digit group responds to increment/decrement while editing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditScope {
    /// The minutes group (left of the colon)
    #[default]
    Minutes,
    /// The seconds group (right of the colon)
    Seconds,
}

impl EditScope {
    /// Returns the other scope.
    pub fn toggled(self) -> Self {
        match self {
            EditScope::Minutes => EditScope::Seconds,
            EditScope::Seconds => EditScope::Minutes,
        }
    }
}

// ============================================================================
// Presentation options
// ============================================================================

/// A background theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub label: &'static str,
    pub bg_class: &'static str,
    /// Whether a noise texture is drawn over the background
    pub noise: bool,
    /// Whether the edges are darkened
    pub vignette: bool,
}

/// Font families, in cycling order.
pub const FONTS: [&str; 8] = [
    "JetBrains Mono",
    "Share Tech Mono",
    "Space Mono",
    "Roboto Mono",
    "Inter",
    "Cinzel",
    "Playfair Display",
    "Times New Roman",
];

/// Themes, in cycling order.
pub static THEMES: [Theme; 6] = [
    Theme {
        id: "void",
        label: "Void",
        bg_class: "bg-black",
        noise: false,
        vignette: false,
    },
    Theme {
        id: "carbon",
        label: "Carbon",
        bg_class: "bg-zinc-950",
        noise: true,
        vignette: true,
    },
    Theme {
        id: "midnight",
        label: "Midnight",
        bg_class: "bg-slate-950",
        noise: true,
        vignette: true,
    },
    Theme {
        id: "forest",
        label: "Forest",
        bg_class: "bg-emerald-950",
        noise: true,
        vignette: true,
    },
    Theme {
        id: "coffee",
        label: "Coffee",
        bg_class: "bg-stone-950",
        noise: true,
        vignette: true,
    },
    Theme {
        id: "crimson",
        label: "Crimson",
        bg_class: "bg-rose-950",
        noise: true,
        vignette: true,
    },
];

// ============================================================================
// ClockConfig
// ============================================================================

/// Upper bound for `ClockConfig::max_minutes`; three display digits.
pub const MAX_MINUTES_LIMIT: u32 = 999;

/// Configuration for the clock engine.
///
/// Missing fields take their defaults when deserializing, so a config file
/// only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Countdown reset target at startup, in seconds
    pub initial_seconds: u32,
    /// Mode at startup
    pub initial_mode: TimerMode,
    /// Font index at startup
    pub font_index: usize,
    /// Theme index at startup
    pub theme_index: usize,
    /// Countdown value used when switching back with no reset target
    pub fallback_seconds: u32,
    /// Upper bound for the minutes group while editing
    pub max_minutes: u32,
    /// Tick period in milliseconds
    pub tick_ms: u64,
    /// Inactivity before the overlay hides, in milliseconds
    pub auto_hide_ms: u64,
    /// How long an edited digit group stays highlighted, in milliseconds
    pub flash_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            initial_seconds: 25 * 60,
            initial_mode: TimerMode::Countdown,
            font_index: 0,
            theme_index: 0,
            fallback_seconds: 300,
            max_minutes: MAX_MINUTES_LIMIT,
            tick_ms: 1000,
            auto_hide_ms: 3000,
            flash_ms: 150,
        }
    }
}

impl ClockConfig {
    /// Sets the countdown length in whole minutes.
    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.initial_seconds = minutes * 60;
        self
    }

    /// Sets the mode at startup.
    pub fn with_mode(mut self, mode: TimerMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Sets the font index at startup.
    pub fn with_font(mut self, index: usize) -> Self {
        self.font_index = index;
        self
    }

    /// Sets the theme index at startup.
    pub fn with_theme(mut self, index: usize) -> Self {
        self.theme_index = index;
        self
    }

    /// Largest value the edit arithmetic can produce.
    pub fn max_seconds(&self) -> u32 {
        self.max_minutes.saturating_mul(60).saturating_add(59)
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_minutes > MAX_MINUTES_LIMIT {
            return Err(format!(
                "max minutes must be at most {}",
                MAX_MINUTES_LIMIT
            ));
        }
        if self.fallback_seconds > self.max_seconds() {
            return Err(format!(
                "fallback duration must be at most {} minutes",
                self.max_minutes
            ));
        }
        if self.initial_seconds > self.max_seconds() {
            return Err(format!(
                "initial duration must be at most {} minutes",
                self.max_minutes
            ));
        }
        if self.font_index >= FONTS.len() {
            return Err(format!("font index must be below {}", FONTS.len()));
        }
        if self.theme_index >= THEMES.len() {
            return Err(format!("theme index must be below {}", THEMES.len()));
        }
        if self.tick_ms == 0 || self.auto_hide_ms == 0 || self.flash_ms == 0 {
            return Err("timer periods must be non-zero".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// ClockState
// ============================================================================

/// Result of advancing the clock by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock was not running; nothing changed
    Idle,
    /// The displayed value moved by one second
    Advanced,
    /// A countdown reached zero and stopped
    Completed,
}

/// The clock's mutable state.
///
/// Methods here are pure transitions; scheduling and signals are the
/// engine's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockState {
    pub mode: TimerMode,
    pub seconds: u32,
    /// Value `seconds` resets to in countdown mode
    pub initial_duration: u32,
    pub is_running: bool,
    pub edit_scope: EditScope,
    pub flash_scope: Option<EditScope>,
    pub font_index: usize,
    pub theme_index: usize,
    /// Visibility driven by the inactivity timer
    pub auto_hide_visible: bool,
    /// Visibility the user asked for with the hide key
    pub user_hidden: bool,
}

impl ClockState {
    /// Creates a paused state from the configuration.
    pub fn new(config: &ClockConfig) -> Self {
        let seconds = match config.initial_mode {
            TimerMode::Countdown => config.initial_seconds,
            TimerMode::Stopwatch => 0,
        };
        Self {
            mode: config.initial_mode,
            seconds,
            initial_duration: config.initial_seconds,
            is_running: false,
            edit_scope: EditScope::Minutes,
            flash_scope: None,
            font_index: config.font_index % FONTS.len(),
            theme_index: config.theme_index % THEMES.len(),
            auto_hide_visible: true,
            user_hidden: false,
        }
    }

    /// Returns false for a countdown sitting at zero.
    pub fn can_start(&self) -> bool {
        !(self.mode == TimerMode::Countdown && self.seconds == 0)
    }

    /// Returns true if the digits can be edited (paused countdown).
    pub fn is_editable(&self) -> bool {
        self.mode == TimerMode::Countdown && !self.is_running
    }

    /// Stops the clock and restores the mode's starting value.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.seconds = match self.mode {
            TimerMode::Countdown => self.initial_duration,
            TimerMode::Stopwatch => 0,
        };
    }

    /// Stops the clock and flips the mode.
    ///
    /// Entering countdown shows the reset target, or `fallback` when the
    /// target is zero. The target itself is left alone.
    pub fn switch_mode(&mut self, fallback: u32) {
        self.is_running = false;
        self.mode = self.mode.toggled();
        self.seconds = match self.mode {
            TimerMode::Stopwatch => 0,
            TimerMode::Countdown if self.initial_duration > 0 => self.initial_duration,
            TimerMode::Countdown => fallback,
        };
    }

    pub fn cycle_font(&mut self) {
        self.font_index = (self.font_index + 1) % FONTS.len();
    }

    pub fn cycle_theme(&mut self) {
        self.theme_index = (self.theme_index + 1) % THEMES.len();
    }

    /// Flips the user-hidden flag and returns the new value.
    ///
    /// Unhiding forces the overlay visible right away.
    pub fn toggle_user_hidden(&mut self) -> bool {
        self.user_hidden = !self.user_hidden;
        if !self.user_hidden {
            self.auto_hide_visible = true;
        }
        self.user_hidden
    }

    pub fn toggle_edit_scope(&mut self) {
        self.edit_scope = self.edit_scope.toggled();
    }

    /// Nudges the digit group under edit by one and makes the result the new
    /// reset target.
    ///
    /// Minutes clamp to `[0, max_minutes]`. Seconds wrap 59 ↔ 0 without
    /// borrowing from or carrying into the minutes.
    pub fn adjust(&mut self, increment: bool, max_minutes: u32) {
        let mut minutes = self.seconds / 60;
        let mut secs = self.seconds % 60;

        match self.edit_scope {
            EditScope::Minutes => {
                minutes = if increment {
                    minutes.saturating_add(1).min(max_minutes)
                } else {
                    minutes.saturating_sub(1)
                };
            }
            EditScope::Seconds => {
                secs = match (increment, secs) {
                    (true, 59) => 0,
                    (true, s) => s + 1,
                    (false, 0) => 59,
                    (false, s) => s - 1,
                };
            }
        }

        self.seconds = minutes * 60 + secs;
        self.initial_duration = self.seconds;
    }

    /// Advances the clock by one second.
    ///
    /// A countdown that reaches zero clamps there and stops itself.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Idle;
        }
        match self.mode {
            TimerMode::Stopwatch => {
                self.seconds = self.seconds.saturating_add(1);
                TickOutcome::Advanced
            }
            TimerMode::Countdown => {
                if self.seconds <= 1 {
                    self.seconds = 0;
                    self.is_running = false;
                    TickOutcome::Completed
                } else {
                    self.seconds -= 1;
                    TickOutcome::Advanced
                }
            }
        }
    }

    /// Final overlay visibility.
    pub fn ui_visible(&self) -> bool {
        self.auto_hide_visible && !self.user_hidden
    }

    /// Takes a read-only snapshot for renderers.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            seconds: self.seconds,
            initial_duration: self.initial_duration,
            is_running: self.is_running,
            ui_visible: self.ui_visible(),
            edit_scope: self.edit_scope,
            flash_scope: self.flash_scope,
            font_index: self.font_index,
            theme_index: self.theme_index,
            font_family: FONTS[self.font_index],
            theme: &THEMES[self.theme_index],
        }
    }
}

// ============================================================================
// TimerSnapshot
// ============================================================================

/// The clock's externally visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub seconds: u32,
    pub initial_duration: u32,
    pub is_running: bool,
    pub ui_visible: bool,
    pub edit_scope: EditScope,
    pub flash_scope: Option<EditScope>,
    pub font_index: usize,
    pub theme_index: usize,
    pub font_family: &'static str,
    pub theme: &'static Theme,
}

impl TimerSnapshot {
    /// Returns true if the digits are in edit mode.
    pub fn is_edit_mode(&self) -> bool {
        self.mode == TimerMode::Countdown && !self.is_running
    }

    /// Splits the displayed value into (minutes, seconds).
    pub fn parts(&self) -> (u32, u32) {
        (self.seconds / 60, self.seconds % 60)
    }
}

/// Formats seconds as `MM:SS`.
///
/// Minutes are padded to two digits and may grow past 99 (`100:00`).
pub fn format_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// Tests
// ============================================================================
