#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/canning/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod snapshot;
pub mod universe;

// Re-export main types from sub-crates
pub use canning_data as data;
pub use canning_factors as factors;
pub use canning_output as output;
pub use canning_rank as rank;

pub use config::{CONFIG_ENV, EngineConfig, default_config_path, locate};
pub use engine::{Engine, compute};
pub use error::{ConfigError, EngineError, Result};
pub use snapshot::Snapshot;
pub use universe::{Sector, Universe, canonical_label};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
