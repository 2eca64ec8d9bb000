//! Quality sub-score.
//!
//! Combines profitability (ROA), leverage (debt/equity, lower is better) and
//! liquidity (current ratio) percentiles. Equal weights unless configured.

use crate::metric::Metric;
use crate::score::{Configurable, SubScore};
use serde::{Deserialize, Serialize};

/// Configuration for the quality sub-score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Weight for ROA percentile (default: 1/3)
    pub roa_weight: f64,
    /// Weight for debt/equity percentile (default: 1/3)
    pub debt_to_equity_weight: f64,
    /// Weight for current ratio percentile (default: 1/3)
    pub current_ratio_weight: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            roa_weight: 1.0 / 3.0,
            debt_to_equity_weight: 1.0 / 3.0,
            current_ratio_weight: 1.0 / 3.0,
        }
    }
}

/// Quality sub-score from balance-sheet percentiles
#[derive(Debug, Clone)]
pub struct QualityScore {
    config: QualityConfig,
}

impl SubScore for QualityScore {
    fn name(&self) -> &str {
        "quality"
    }

    fn components(&self) -> Vec<(Metric, f64)> {
        vec![
            (Metric::Roa, self.config.roa_weight),
            (Metric::DebtToEquity, self.config.debt_to_equity_weight),
            (Metric::CurrentRatio, self.config.current_ratio_weight),
        ]
    }
}

impl Configurable for QualityScore {
    type Config = QualityConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

impl Default for QualityScore {
    fn default() -> Self {
        Self::with_config(QualityConfig::default())
    }
}
