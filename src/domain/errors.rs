//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main error type for the anonymization engine
///
/// The engine degrades gracefully on malformed per-field data; these errors
/// are reserved for structurally invalid input and misconfiguration.
#[derive(Debug, Error)]
pub enum MaskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Structurally invalid input (non-object records, blank identifiers)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MaskError {
    fn from(err: serde_json::Error) -> Self {
        MaskError::Serialization(err.to_string())
    }
}
