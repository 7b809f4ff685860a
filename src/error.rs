//! Error types for blast project generation.

use thiserror::Error;

/// Main error type for the generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Grid of {cells} wells exceeds the allowed maximum of {limit}")]
    GridTooLarge { cells: u64, limit: u64 },

    #[error("Invalid grid dimension: {field} must be a positive integer, got {value}")]
    InvalidGridDimension { field: &'static str, value: i64 },

    #[error("Failed to encode {type_name}: {message}")]
    Encode {
        type_name: &'static str,
        message: String,
    },

    #[error("Malformed XML at offset {offset}: {message}")]
    MalformedXml { offset: usize, message: String },

    #[error("Missing element '{name}' in {document}")]
    MissingElement {
        name: &'static str,
        document: &'static str,
    },

    #[error("Missing attribute '{name}' on element '{element}'")]
    MissingAttribute { name: String, element: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
