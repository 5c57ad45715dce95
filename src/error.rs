//! Error types for geomval

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting column values
#[derive(Error, Debug)]
pub enum Error {
    /// The raw column value was not the representation the codec reads
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },

    /// The raw column value had the right shape but failed to parse
    #[error("decode error: {0}")]
    Decode(String),
}
