//! Command definitions for the stageclock CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::{ClockConfig, TimerMode, FONTS, THEMES};

// ============================================================================
// CLI Structure
// ============================================================================

/// Stageclock - a fullscreen terminal countdown and stopwatch
#[derive(Parser, Debug)]
#[command(
    name = "stageclock",
    version,
    about = "Fullscreen terminal countdown timer and stopwatch",
    long_about = "Big-digit countdown timer and stopwatch for the terminal.\n\
                  Space starts/pauses, S switches mode, R resets, arrows edit a paused countdown.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Arguments
// ============================================================================

/// Arguments for running the clock
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Countdown length in minutes (0-999)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(0..=999)
    )]
    pub minutes: u32,

    /// Start in stopwatch mode
    #[arg(short, long)]
    pub stopwatch: bool,

    /// Font index (0-7)
    #[arg(long, default_value = "0", value_parser = validate_font)]
    pub font: usize,

    /// Theme index (0-5)
    #[arg(long, default_value = "0", value_parser = validate_theme)]
    pub theme: usize,

    /// Disable chime and click sounds
    #[arg(long)]
    pub no_sound: bool,

    /// Start on the normal screen instead of the alternate screen
    #[arg(long)]
    pub windowed: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read timing settings from this JSON file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            minutes: 25,
            stopwatch: false,
            font: 0,
            theme: 0,
            no_sound: false,
            windowed: false,
            log_file: None,
            config: None,
        }
    }
}

impl RunArgs {
    /// Builds the engine configuration for these arguments on top of the
    /// built-in defaults.
    pub fn to_config(&self) -> ClockConfig {
        self.apply(ClockConfig::default())
    }

    /// Overrides the start values of `base` with these arguments.
    ///
    /// Timing values (tick, auto-hide, flash, fallback, limits) are kept.
    pub fn apply(&self, base: ClockConfig) -> ClockConfig {
        let mode = if self.stopwatch {
            TimerMode::Stopwatch
        } else {
            TimerMode::Countdown
        };
        base.with_minutes(self.minutes)
            .with_mode(mode)
            .with_font(self.font)
            .with_theme(self.theme)
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

fn parse_index(s: &str, len: usize, what: &str) -> Result<usize, String> {
    let index: usize = s
        .parse()
        .map_err(|_| format!("{what} must be a number"))?;
    if index >= len {
        return Err(format!("{what} must be between 0 and {}", len - 1));
    }
    Ok(index)
}

/// Validates a font index against the font list.
fn validate_font(s: &str) -> Result<usize, String> {
    parse_index(s, FONTS.len(), "font")
}

/// Validates a theme index against the theme list.
fn validate_theme(s: &str) -> Result<usize, String> {
    parse_index(s, THEMES.len(), "theme")
}

// ============================================================================
// Tests
// ============================================================================
