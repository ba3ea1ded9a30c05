//! Settings loading errors.

use thiserror::Error;

/// Result alias using [`SettingsError`].
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors produced while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for [`crate::Settings`].
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}
