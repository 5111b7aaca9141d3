//! Error types for model operations.

use thiserror::Error;

/// Errors raised while building model values from external input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Catalog JSON could not be parsed.
    #[error("Failed to parse catalog JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// Zoom value outside the 0..=100 range or not an integer.
    #[error("Invalid zoom level '{value}' (expected an integer from 0 to 100)")]
    InvalidZoom { value: String },

    /// Unknown view mode literal.
    #[error("Unknown view mode '{value}' (expected ORBIT or SYSTEM)")]
    InvalidViewMode { value: String },
}

impl From<serde_json::Error> for ModelError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
