//! JSON config file for clock timings.
//!
//! Looked up at `--config <PATH>` or, if that flag is absent, at
//! `<config dir>/stageclock/config.json`. A missing default file is not an
//! error; a missing explicit file is.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::types::ClockConfig;

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stageclock").join("config.json"))
}

/// Loads the base configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<ClockConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(ClockConfig::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<ClockConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: ClockConfig = serde_json::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}
