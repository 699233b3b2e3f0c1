//! Result type alias for domain operations

use super::errors::MaskError;

/// Result type alias using [`MaskError`] as the error type
pub type Result<T> = std::result::Result<T, MaskError>;
