//! Error types for the matrix engine.

use thiserror::Error;

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Errors that can occur while building or editing a matrix.
///
/// Every variant describes a bad reference or bad construction input; a
/// failed call leaves the matrix unchanged.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Row index past the end of the matrix.
    #[error("row {index} out of range (matrix has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// No row carries this resource name.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// Resource names must be unique within one matrix.
    #[error("duplicate resource: {0}")]
    DuplicateResource(String),

    /// Resource names must not be blank.
    #[error("resource name is empty")]
    EmptyResourceName,

    /// Column or permission text failed to parse.
    #[error(transparent)]
    Types(#[from] accessgrid_types::Error),

    /// Payload JSON could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
