use std::io;

use thiserror::Error;

/// Library-wide error type for launcher operations.
///
/// Failures of the external steps (pip, streamlit) are never represented
/// here; they are recorded as [`crate::domain::StepOutcome`] values and the
/// launch continues.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The launcher could not determine its own directory.
    #[error("Cannot resolve launcher directory: {0}")]
    LauncherDirUnresolved(String),

    /// Switching into the launcher directory failed.
    #[error("Cannot enter launcher directory '{path}': {details}")]
    EnterDirFailed { path: String, details: String },

    /// Variant name is not recognised.
    #[error("Invalid variant '{0}': must be one of plain, backup")]
    InvalidVariant(String),

    /// A configured value was empty or malformed.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidSetting { field: String, reason: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Terminal interaction failed while pausing.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The Ctrl-C handler could not be installed.
    #[error("Cannot install interrupt handler: {0}")]
    Interrupt(String),
}
