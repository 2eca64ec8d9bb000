//! Error types for aggregation.

use thiserror::Error;

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, AggregateError>;

/// Errors raised by aggregation settings.
#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    /// Allocation exponent is zero, negative or not finite
    #[error("Invalid allocation exponent: {0} (must be finite and positive)")]
    InvalidExponent(f64),
}
