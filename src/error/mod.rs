//! Error types for skeleton.
//!
//! The running screen has no failure states: the simulated fetch cannot fail
//! and every animation is a total function of time. What can go wrong is
//! configuration, so that is the only typed error. Terminal and I/O plumbing
//! at the top level reports through `color_eyre`.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} duration must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("peak alpha must be in (0, 1], got {0}")]
    PeakAlphaOutOfRange(f32),

    #[error("gradient band fraction must be in (0, 1], got {0}")]
    BandFractionOutOfRange(f32),

    #[error("a gradient needs at least two colors, got {0}")]
    TooFewGradientColors(usize),

    #[error("at least one section must be configured")]
    NoSections,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Whether the error came from the config file itself rather than a value
    /// in it.
    pub fn is_file_error(&self) -> bool {
        matches!(self, ConfigError::Read { .. } | ConfigError::Parse(_))
    }
}
