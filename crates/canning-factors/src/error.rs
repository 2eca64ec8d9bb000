//! Error types for scoring configuration.

use thiserror::Error;

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Errors raised when a scoring configuration cannot be used.
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    /// A weight is negative or not finite
    #[error("Invalid weight for {name}: {value} (must be finite and non-negative)")]
    InvalidWeight {
        /// Name of the weight
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Every weight in a group is zero
    #[error("All {0} weights are zero")]
    ZeroWeights(&'static str),

    /// Penalty multiplier outside [0, 1]
    #[error("Invalid negative growth penalty: {0} (must be between 0 and 1)")]
    InvalidPenalty(f64),
}
