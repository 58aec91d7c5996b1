//! CLI module for stageclock.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `config`: JSON config file for clock timings
//! - `app`: Terminal host running the clock until quit

pub mod app;
pub mod commands;
pub mod config;

pub use app::run;
pub use commands::{Cli, Commands, RunArgs};
pub use config::{default_config_path, load_config};
