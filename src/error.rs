//! Error types for media utilities.

use thiserror::Error;

use crate::models::media::{MediaSource, MediaType};

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for media utilities.
#[derive(Error, Debug)]
pub enum Error {
    // Classification errors
    #[error("Cannot determine media type for: {0}")]
    UnclassifiableInput(String),

    #[error("Cannot read source {path}: {reason}")]
    UnreadableSource { path: String, reason: String },

    // Rule set errors
    #[error("Duplicate naming rule for {media_type}/{selector}")]
    DuplicateRule {
        media_type: MediaType,
        selector: String,
    },

    #[error("Unknown template field '{field}' for media type {media_type}")]
    UnknownTemplateField { media_type: MediaType, field: String },

    #[error("Invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("No naming rule matches {media_type}/{media_source}")]
    NoMatchingRule {
        media_type: MediaType,
        media_source: MediaSource,
    },

    // Render errors
    #[error("Missing required field '{field}' for {path}")]
    MissingRequiredField { path: String, field: String },

    #[error("Sanitized name for {path} is empty (rendered from '{rendered}')")]
    InvalidSanitizedOutput { path: String, rendered: String },

    #[error("Substitute character {0:?} is itself reserved")]
    InvalidSubstitute(char),

    // Config errors
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid config file {path}: {reason}")]
    ConfigInvalid { path: String, reason: String },

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("File already exists: {0}")]
    FileAlreadyExists(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // TOML errors
    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
