//! Error types for the paginator library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all paginator operations.
#[derive(Error, Debug)]
pub enum PagerError {
    /// The requested page lies beyond the last page
    #[error("There aren't that many pages")]
    PageOutOfRange { page: usize, total_pages: usize },
    /// Page numbers are 1-indexed, so page 0 never exists
    #[error("Page numbers start at 1")]
    PageNotPositive,
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PagerError {
        PagerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PagerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for paginator operations
pub type Result<T> = std::result::Result<T, PagerError>;
