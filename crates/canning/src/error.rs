//! Error types for the engine and its configuration.

use canning_data::DataError;
use canning_factors::ScoringError;
use canning_rank::AggregateError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`EngineConfig`](crate::EngineConfig).
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be written as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Scoring weights are unusable.
    #[error("Invalid scoring config: {0}")]
    Scoring(#[from] ScoringError),

    /// Allocation settings are unusable.
    #[error("Invalid allocation config: {0}")]
    Aggregate(#[from] AggregateError),
}

/// Errors raised while building a universe or computing a bundle.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Snapshot could not be loaded.
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Two records share a ticker.
    #[error("Duplicate ticker in universe: {0}")]
    DuplicateTicker(String),

    /// A record has no ticker.
    #[error("Record {0} has an empty ticker")]
    EmptyTicker(usize),

    /// Configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
