//! Momentum sub-score.
//!
//! Momentum is revenue growth by default. Profit growth is ranked and can be
//! blended in through the config, but carries no weight out of the box.

use crate::metric::Metric;
use crate::score::{Configurable, SubScore};
use serde::{Deserialize, Serialize};

/// Configuration for the momentum sub-score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumConfig {
    /// Weight for revenue growth percentile (default: 1.0)
    pub revenue_growth_weight: f64,
    /// Weight for profit growth percentile (default: 0.0)
    pub profit_growth_weight: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            revenue_growth_weight: 1.0,
            profit_growth_weight: 0.0,
        }
    }
}

/// Momentum sub-score from growth percentiles
#[derive(Debug, Clone)]
pub struct MomentumScore {
    config: MomentumConfig,
}

impl SubScore for MomentumScore {
    fn name(&self) -> &str {
        "momentum"
    }

    fn components(&self) -> Vec<(Metric, f64)> {
        vec![
            (Metric::RevenueGrowth, self.config.revenue_growth_weight),
            (Metric::ProfitGrowth, self.config.profit_growth_weight),
        ]
    }
}

impl Configurable for MomentumScore {
    type Config = MomentumConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

impl Default for MomentumScore {
    fn default() -> Self {
        Self::with_config(MomentumConfig::default())
    }
}
