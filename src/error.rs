//! Custom error types for tuidoo
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the tuidoo application
#[derive(Error, Debug)]
pub enum TuidooError {
    /// Requested theme identifier is not in the catalog
    #[error("Theme '{0}' not found.\n\n  → Run 'tuidoo theme list' to see available themes.")]
    ThemeNotFound(String),

    /// Two catalog entries share an identifier
    #[error("Theme identifier '{0}' is defined more than once.")]
    DuplicateTheme(String),

    /// A palette failed validation
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    /// A colour string could not be parsed
    #[error("Invalid colour '{0}'\n\n  → Expected format: #rrggbb")]
    InvalidColor(String),

    /// Database error
    #[error("Storage failed: {0}\n\n  → Check that the database path is writable, or point --database at a new file.")]
    Storage(String),

    /// A record with the given ID or name does not exist
    #[error("{0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<rusqlite::Error> for TuidooError {
    fn from(err: rusqlite::Error) -> Self {
        TuidooError::Storage(err.to_string())
    }
}

impl From<toml::de::Error> for TuidooError {
    fn from(err: toml::de::Error) -> Self {
        TuidooError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for TuidooError {
    fn from(err: toml::ser::Error) -> Self {
        TuidooError::Toml(err.to_string())
    }
}

/// Result type alias using TuidooError
pub type Result<T> = std::result::Result<T, TuidooError>;
