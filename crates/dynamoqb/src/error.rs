//! Error types for dynamoqb

use thiserror::Error;

/// Result type alias for dynamoqb operations
pub type QbResult<T> = Result<T, QbError>;

/// Error types for parameter building
///
/// The builders themselves have no failure modes: conditions, operators, and
/// values are opaque strings passed through verbatim, and malformed input is
/// rejected by the store at query time. The only fallible surface is JSON
/// interchange.
#[derive(Debug, Error)]
pub enum QbError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
