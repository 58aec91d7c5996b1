//! Display controller error types.

use thiserror::Error;

/// Errors that can occur while changing the display mode.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// The terminal rejected the escape sequence or stdout failed.
    #[error("terminal display request failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// The environment has no fullscreen capability.
    #[error("fullscreen is not supported here: {0}")]
    Unsupported(String),
}

impl DisplayError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Terminal(_) => "check that stdout is an interactive terminal",
            Self::Unsupported(_) => "use the terminal's own fullscreen shortcut",
        }
    }
}
