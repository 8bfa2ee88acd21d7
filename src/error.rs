//! Error types for configuration loading and validation
//!
//! The interaction engine itself never fails: degenerate geometry and
//! malformed gestures degrade silently. Errors only exist at the settings
//! boundary.

use thiserror::Error;

/// Errors that can occur while loading or validating [`crate::ScrollSettings`]
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error while reading a settings file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A structural role name is empty or whitespace
    #[error("Empty name for the {role} role")]
    EmptyRoleName { role: &'static str },

    /// Two structural roles share the same name
    #[error("Role name '{name}' is used by more than one role")]
    DuplicateRoleName { name: String },
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
