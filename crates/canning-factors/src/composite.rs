//! Composite display score.
//!
//! `display = momentum_weight * momentum + quality_weight * quality`, with
//! weights normalized to sum to one and the result clamped to 0-100. Missing
//! sub-scores follow the configured [`MissingPolicy`]. A company with no
//! momentum and no quality scores 0.
//!
//! Companies with shrinking revenue have their display score multiplied by
//! the negative growth penalty when one is configured.

use crate::error::{Result, ScoringError};
use crate::metric::Metric;
use crate::momentum::{MomentumConfig, MomentumScore};
use crate::percentile::{MetricPercentiles, PERCENTILE_SCALE, PercentileRanker};
use crate::quality::{QualityConfig, QualityScore};
use crate::score::{Configurable, MissingPolicy, SubScore, combine};
use canning_data::CompanyRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight for the momentum sub-score (default: 0.33)
    pub momentum_weight: f64,
    /// Weight for the quality sub-score (default: 0.67)
    pub quality_weight: f64,
    /// Treatment of missing components (default: reweight)
    pub missing: MissingPolicy,
    /// Multiplier applied when revenue growth is negative (default: 0.65)
    pub negative_growth_penalty: Option<f64>,
    /// Momentum component weights
    pub momentum: MomentumConfig,
    /// Quality component weights
    pub quality: QualityConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            momentum_weight: 0.33,
            quality_weight: 0.67,
            missing: MissingPolicy::default(),
            negative_growth_penalty: Some(0.65),
            momentum: MomentumConfig::default(),
            quality: QualityConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Check that every weight is usable.
    pub fn validate(&self) -> Result<()> {
        check_group(
            "display",
            &[
                ("momentum_weight", self.momentum_weight),
                ("quality_weight", self.quality_weight),
            ],
        )?;
        check_group(
            "momentum",
            &[
                ("revenue_growth_weight", self.momentum.revenue_growth_weight),
                ("profit_growth_weight", self.momentum.profit_growth_weight),
            ],
        )?;
        check_group(
            "quality",
            &[
                ("roa_weight", self.quality.roa_weight),
                ("debt_to_equity_weight", self.quality.debt_to_equity_weight),
                ("current_ratio_weight", self.quality.current_ratio_weight),
            ],
        )?;

        if let Some(penalty) = self.negative_growth_penalty
            && !(0.0..=1.0).contains(&penalty)
        {
            return Err(ScoringError::InvalidPenalty(penalty));
        }

        Ok(())
    }
}

fn check_group(group: &'static str, weights: &[(&'static str, f64)]) -> Result<()> {
    for &(name, value) in weights {
        if !value.is_finite() || value < 0.0 {
            return Err(ScoringError::InvalidWeight { name, value });
        }
    }
    if weights.iter().all(|&(_, w)| w == 0.0) {
        return Err(ScoringError::ZeroWeights(group));
    }
    Ok(())
}

/// A company with its percentiles and scores for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCompany {
    /// Input record, unchanged.
    #[serde(flatten)]
    pub record: CompanyRecord,
    /// Percentile standing on every ranked metric.
    pub percentiles: MetricPercentiles,
    /// Momentum sub-score (0-100), `None` when growth is missing.
    pub momentum_score: Option<f64>,
    /// Quality sub-score (0-100), `None` when every quality metric is missing.
    pub quality_score: Option<f64>,
    /// Composite score (0-100) used for ranking and sector leadership.
    pub display_score: f64,
}

impl ScoredCompany {
    /// Ticker of the underlying record.
    pub fn ticker(&self) -> &str {
        &self.record.ticker
    }

    /// Percentile of the valuation metric relevant to this company's category.
    pub fn valuation_percentile(&self) -> Option<f64> {
        self.percentiles.get(Metric::valuation_for(&self.record))
    }

    /// Display score rounded to a whole number.
    pub fn rounded_score(&self) -> i64 {
        self.display_score.round() as i64
    }
}

/// Computes percentiles, sub-scores and display scores for a universe.
#[derive(Debug, Clone)]
pub struct CompositeScorer {
    config: ScoringConfig,
    ranker: PercentileRanker,
    momentum: MomentumScore,
    quality: QualityScore,
}

impl CompositeScorer {
    /// Display score for already computed sub-scores.
    pub fn display_score(
        &self,
        momentum: Option<f64>,
        quality: Option<f64>,
        revenue_growth: Option<f64>,
    ) -> f64 {
        let mut score = combine(
            [
                (momentum, self.config.momentum_weight),
                (quality, self.config.quality_weight),
            ],
            self.config.missing,
        )
        .unwrap_or(0.0);

        if let Some(penalty) = self.config.negative_growth_penalty
            && revenue_growth.is_some_and(|g| g < 0.0)
        {
            score *= penalty;
        }

        score.clamp(0.0, PERCENTILE_SCALE)
    }

    /// Score one company from its percentiles.
    pub fn score_company(&self, record: CompanyRecord, percentiles: MetricPercentiles) -> ScoredCompany {
        let policy = self.config.missing;
        let momentum_score = self.momentum.score(&percentiles, policy);
        let quality_score = self.quality.score(&percentiles, policy);
        let display_score = self.display_score(
            momentum_score,
            quality_score,
            Metric::RevenueGrowth.value(&record),
        );

        ScoredCompany {
            record,
            percentiles,
            momentum_score,
            quality_score,
            display_score,
        }
    }

    /// Score every company in a universe. Output order matches input order.
    pub fn score_universe(&self, records: &[CompanyRecord]) -> Vec<ScoredCompany> {
        let percentiles = self.ranker.rank_all(records);
        let scored: Vec<ScoredCompany> = records
            .iter()
            .cloned()
            .zip(percentiles)
            .map(|(record, pct)| self.score_company(record, pct))
            .collect();

        debug!(
            companies = scored.len(),
            momentum = self.momentum.name(),
            quality = self.quality.name(),
            "scored universe"
        );
        scored
    }
}

impl Configurable for CompositeScorer {
    type Config = ScoringConfig;

    fn with_config(config: Self::Config) -> Self {
        Self {
            ranker: PercentileRanker::new(),
            momentum: MomentumScore::with_config(config.momentum.clone()),
            quality: QualityScore::with_config(config.quality.clone()),
            config,
        }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

impl Default for CompositeScorer {
    fn default() -> Self {
        Self::with_config(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use canning_data::FeedValue;

    fn company(ticker: &str, growth: f64, roa: f64, de: f64, cr: f64) -> CompanyRecord {
        CompanyRecord {
            revenue_growth: FeedValue::from(growth),
            roa: FeedValue::from(roa),
            debt_to_equity: FeedValue::from(de),
            current_ratio: FeedValue::from(cr),
            ..CompanyRecord::new(ticker, ticker, "Tech")
        }
    }

    #[test]
    fn test_two_company_scenario() {
        let records = vec![
            company("A", 0.20, 0.10, 0.5, 1.5),
            company("B", 0.05, 0.20, 0.2, 2.0),
        ];

        let scored = CompositeScorer::default().score_universe(&records);

        assert_eq!(scored[0].percentiles.revenue_growth, Some(100.0));
        assert_eq!(scored[1].percentiles.revenue_growth, Some(0.0));
        assert_eq!(scored[0].momentum_score, Some(100.0));
        assert_relative_eq!(scored[0].quality_score.unwrap(), 0.0);
        assert_relative_eq!(scored[1].quality_score.unwrap(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(scored[0].display_score, 33.0, epsilon = 1e-9);
        assert_relative_eq!(scored[1].display_score, 67.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sentinel_leverage_not_penalized() {
        let mut records = vec![
            company("A", 0.10, 0.10, 0.5, 1.5),
            company("B", 0.10, 0.20, 0.2, 2.0),
            company("C", 0.10, 0.15, 3.0, 1.8),
        ];
        records[2].debt_to_equity = FeedValue::NotApplicable;

        let scored = CompositeScorer::default().score_universe(&records);
        let c = &scored[2];

        assert_eq!(c.percentiles.debt_to_equity, None);
        // ROA and current ratio are both mid-table, so quality is 50, not
        // dragged down by a worst-case leverage standing.
        assert_relative_eq!(c.quality_score.unwrap(), 50.0, epsilon = 1e-9);
        assert_eq!(scored[0].percentiles.debt_to_equity, Some(0.0));
        assert_eq!(scored[1].percentiles.debt_to_equity, Some(100.0));
    }

    #[test]
    fn test_zero_policy_counts_missing_as_zero() {
        let config = ScoringConfig {
            missing: MissingPolicy::Zero,
            ..ScoringConfig::default()
        };
        let scorer = CompositeScorer::with_config(config);
        assert_relative_eq!(scorer.display_score(Some(100.0), None, None), 33.0, epsilon = 1e-9);

        let reweight = CompositeScorer::default();
        assert_relative_eq!(reweight.display_score(Some(100.0), None, None), 100.0);
    }

    #[test]
    fn test_no_subscores_scores_zero() {
        let scorer = CompositeScorer::default();
        assert_eq!(scorer.display_score(None, None, None), 0.0);
    }

    #[test]
    fn test_negative_growth_penalty() {
        let scorer = CompositeScorer::default();
        let healthy = scorer.display_score(Some(50.0), Some(50.0), Some(0.01));
        let shrinking = scorer.display_score(Some(50.0), Some(50.0), Some(-0.01));
        assert_relative_eq!(healthy, 50.0, epsilon = 1e-9);
        assert_relative_eq!(shrinking, 32.5, epsilon = 1e-9);

        let no_penalty = CompositeScorer::with_config(ScoringConfig {
            negative_growth_penalty: None,
            ..ScoringConfig::default()
        });
        assert_relative_eq!(
            no_penalty.display_score(Some(50.0), Some(50.0), Some(-0.01)),
            50.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_valuation_percentile_by_category() {
        let mut bank = company("BANK", 0.1, 0.01, 5.0, 1.0);
        bank.category = "Banking & Finance".to_string();
        bank.pb = FeedValue::from(1.0);
        bank.ev_ebitda = FeedValue::from(20.0);
        let mut other = company("TECH", 0.1, 0.10, 0.2, 2.0);
        other.pb = FeedValue::from(8.0);
        other.ev_ebitda = FeedValue::from(10.0);

        let scored = CompositeScorer::default().score_universe(&[bank, other]);
        assert_eq!(scored[0].valuation_percentile(), Some(100.0));
        assert_eq!(scored[1].valuation_percentile(), Some(100.0));
        assert_eq!(scored[0].percentiles.ev_ebitda, Some(0.0));
    }

    #[test]
    fn test_validate_defaults() {
        assert_eq!(ScoringConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        let negative = ScoringConfig {
            momentum_weight: -0.1,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ScoringError::InvalidWeight { name: "momentum_weight", .. })
        ));

        let zero = ScoringConfig {
            quality: QualityConfig {
                roa_weight: 0.0,
                debt_to_equity_weight: 0.0,
                current_ratio_weight: 0.0,
            },
            ..ScoringConfig::default()
        };
        assert_eq!(zero.validate(), Err(ScoringError::ZeroWeights("quality")));

        let penalty = ScoringConfig {
            negative_growth_penalty: Some(1.5),
            ..ScoringConfig::default()
        };
        assert_eq!(penalty.validate(), Err(ScoringError::InvalidPenalty(1.5)));
    }

    #[test]
    fn test_scores_bounded() {
        let records: Vec<CompanyRecord> = (0..20)
            .map(|i| {
                let x = f64::from(i);
                company(&format!("T{i:02}"), x / 10.0 - 1.0, x, 20.0 - x, x / 2.0)
            })
            .collect();

        for scored in CompositeScorer::default().score_universe(&records) {
            assert!((0.0..=100.0).contains(&scored.display_score));
            for p in scored.percentiles.iter().filter_map(|(_, pct)| pct) {
                assert!((0.0..=100.0).contains(&p));
            }
        }
    }
}
