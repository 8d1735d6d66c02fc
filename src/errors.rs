//! Shared error types for the compliance engine
//!
//! The computation functions themselves are total: every building, space or
//! path description yields a result. Errors only surface at the edges, when a
//! collaborator parses a tag from its stored string form, asks for input
//! validation before calling the engine, or loads configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for engine edge operations
#[derive(Debug, Error)]
pub enum Error {
    /// A stored tag did not match any known variant
    #[error("Unknown {kind} tag: '{value}'")]
    UnknownTag { kind: &'static str, value: String },

    /// A numeric input was negative or not finite
    #[error("Invalid input for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an unknown-tag error
    pub fn unknown_tag(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownTag {
            kind,
            value: value.into(),
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input(field: &'static str, value: f64) -> Self {
        Self::InvalidInput { field, value }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Reject negative and non-finite measurements.
///
/// The engine assumes non-negative inputs; collaborators call this (through
/// the `validate` helpers on the records) before handing data over.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_input(field, value))
    }
}
