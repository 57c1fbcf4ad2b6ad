//! Error type shared by every logchu operation.

use std::path::PathBuf;

/// Errors raised while resolving styles, loading configuration or writing sinks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested custom logger is not present in the configuration.
    #[error("custom logger '{id}' does not exist")]
    UnknownLogger { id: String },

    /// A requested or referenced custom color preset is not registered.
    #[error("custom color preset '{id}' does not exist")]
    UnknownColorPreset { id: String },

    /// Custom color presets reference each other in a loop.
    #[error("cycle detected in custom color presets: {}", path.join(" -> "))]
    ColorPresetCycle { path: Vec<String> },

    /// A custom logger was invoked with a preset name it does not define.
    #[error("custom logger '{logger}' has no preset named '{name}'")]
    UnknownPreset { logger: String, name: String },

    /// A hex or decimal color could not be decomposed into RGB channels.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// The configuration file exists but could not be read or parsed.
    #[error("failed to load configuration from '{}': {message}", path.display())]
    ConfigLoad { path: PathBuf, message: String },

    /// The configuration file extension is not one of json, yaml or yml.
    #[error("unsupported configuration format for '{}' (expected .json, .yaml or .yml)", path.display())]
    UnsupportedConfigFormat { path: PathBuf },

    /// Creating or appending to the log file failed.
    #[error("failed to write log file '{}'", path.display())]
    FileSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidColor {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
