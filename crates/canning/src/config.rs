//! Engine configuration.
//!
//! Every section has documented defaults and may be omitted from the TOML
//! file:
//!
//! ```toml
//! [scoring]
//! momentum_weight = 0.33
//! quality_weight = 0.67
//! missing = "reweight"
//! negative_growth_penalty = 0.65
//!
//! [scoring.quality]
//! roa_weight = 1.0
//! debt_to_equity_weight = 1.0
//! current_ratio_weight = 1.0
//!
//! [sectors]
//! excluded = ["Unknown", "Uncategorized"]
//!
//! [allocation]
//! exponent = 3.0
//! ```

use crate::error::ConfigError;
use canning_factors::ScoringConfig;
use canning_rank::{AllocationConfig, SectorConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "CANNING_CONFIG";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Configuration for the whole pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Percentile and composite scoring.
    pub scoring: ScoringConfig,
    /// Sector grouping.
    pub sectors: SectorConfig,
    /// Allocation weighting.
    pub allocation: AllocationConfig,
}

impl EngineConfig {
    /// Parse a TOML document. Missing sections take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml_str(&content)
    }

    /// Load the first config found by [`locate`], or the defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match locate(explicit) {
            Some(path) => Self::load(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.allocation.validate()?;
        Ok(())
    }
}

/// Default config location: `<config_dir>/canning/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("canning").join(CONFIG_FILE))
}

/// Find the config file to use.
///
/// Order: the explicit path, then `CANNING_CONFIG`, then the default
/// location if it exists. An explicit path or environment value is returned
/// even if the file is missing, so the caller reports it.
pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    default_config_path().filter(|p| p.is_file())
}
