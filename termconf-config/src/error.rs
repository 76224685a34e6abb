//! Typed error variants for the termconf-config crate.
//!
//! Library consumers can match on specific failure modes instead of opaque
//! `anyhow` strings. The CLI wraps these in `anyhow::Error` at the top level.

use thiserror::Error;

/// Errors that can occur when loading, layering or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing a settings file.
    #[error("I/O error reading settings: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file contained invalid JSON.
    #[error("JSON parse error in settings: {0}")]
    Json(#[from] serde_json::Error),

    /// A recognized key held a value of the wrong JSON type.
    #[error("Invalid value for '{key}': {source}")]
    InvalidField {
        /// The settings key whose value failed to decode.
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A profile identifier was not a valid GUID string.
    #[error("Invalid profile identifier '{value}'")]
    InvalidProfileId {
        value: String,
        #[source]
        source: uuid::Error,
    },

    /// A color string was not of the form `#rrggbb`.
    #[error("Invalid color '{value}': expected #rrggbb")]
    InvalidColor { value: String },

    /// A color scheme document could not be decoded.
    #[error("Invalid color scheme: {0}")]
    InvalidScheme(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
