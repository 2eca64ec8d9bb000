//! The ranking pipeline.
//!
//! ```text
//! Universe -> percentiles -> scores -> ranking -> sector leaders -> allocation
//! ```
//!
//! Each stage is a pure function of the previous one. The engine holds only
//! configuration, so one engine can compute bundles for independent
//! universes from several threads.

use crate::config::EngineConfig;
use crate::error::{ConfigError, Result};
use crate::universe::Universe;
use canning_factors::{CompositeScorer, Configurable};
use canning_rank::{AllocationWeighter, DerivedBundle, RankingAggregator, SectorAggregator};
use chrono::{DateTime, Utc};
use tracing::{debug_span, info};

/// Configured pipeline from universe to [`DerivedBundle`].
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    scorer: CompositeScorer,
    ranking: RankingAggregator,
    sectors: SectorAggregator,
    allocation: AllocationWeighter,
}

impl Engine {
    /// Build an engine, validating the configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scorer: CompositeScorer::with_config(config.scoring.clone()),
            ranking: RankingAggregator::new(),
            sectors: SectorAggregator::new(config.sectors.clone()),
            allocation: AllocationWeighter::new(config.allocation.clone())
                .map_err(ConfigError::from)?,
            config,
        })
    }

    /// Current configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute a bundle stamped with the current time.
    pub fn compute(&self, universe: &Universe) -> DerivedBundle {
        self.compute_at(universe, Utc::now())
    }

    /// Compute a bundle stamped with `as_of`.
    ///
    /// The output depends only on the universe and the configuration.
    pub fn compute_at(&self, universe: &Universe, as_of: DateTime<Utc>) -> DerivedBundle {
        let _span = debug_span!("compute", companies = universe.len()).entered();

        let scored = self.scorer.score_universe(universe.records());
        let summary = self.ranking.summarize(&scored);
        let companies = self.ranking.rank(scored);
        let sectors = self.sectors.leaders(&companies);
        let allocation = self.allocation.allocate(&sectors);

        info!(
            companies = companies.len(),
            sectors = sectors.len(),
            top = companies.first().map(|c| c.ticker()),
            "computed rankings"
        );

        DerivedBundle {
            as_of,
            companies,
            summary,
            sectors,
            allocation,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            scorer: CompositeScorer::default(),
            ranking: RankingAggregator::new(),
            sectors: SectorAggregator::default(),
            allocation: AllocationWeighter::default(),
        }
    }
}

/// Compute a bundle for one universe with the given configuration.
///
/// # Errors
///
/// Returns an error when the configuration is invalid.
pub fn compute(universe: &Universe, config: &EngineConfig) -> Result<DerivedBundle> {
    Ok(Engine::new(config.clone())?.compute(universe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use canning_data::{CompanyRecord, FeedValue};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_send_sync() {
        assert_send_sync::<Engine>();
        assert_send_sync::<DerivedBundle>();
    }

    #[test]
    fn test_compute_at_is_deterministic() {
        let universe = Universe::from_records(vec![
            CompanyRecord {
                revenue_growth: FeedValue::from(0.1),
                ..CompanyRecord::new("A", "Alpha", "Tech")
            },
            CompanyRecord {
                revenue_growth: FeedValue::from(0.2),
                ..CompanyRecord::new("B", "Beta", "Tech")
            },
        ])
        .unwrap();

        let engine = Engine::default();
        let as_of = Utc::now();
        assert_eq!(engine.compute_at(&universe, as_of), engine.compute_at(&universe, as_of));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.allocation.exponent = -2.0;
        assert!(Engine::new(config.clone()).is_err());
        assert!(compute(&Universe::default(), &config).is_err());
    }
}
