//! Portfolio allocation across sector leaders.
//!
//! Each leader's score is raised to a power before normalizing, which
//! widens the gap between strong and weak leaders:
//!
//! ```text
//! raw_i    = max(score_i, 0) ^ exponent
//! weight_i = 100 * raw_i / sum(raw)
//! ```
//!
//! An empty leader list gives an empty allocation. When every raw weight is
//! zero the allocation is split equally.

use crate::error::{AggregateError, Result};
use crate::sector::SectorGroup;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sum of all allocation weights.
pub const TOTAL_WEIGHT: f64 = 100.0;

/// Configuration for allocation weighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Exponent applied to leader scores (default: 3.0)
    pub exponent: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self { exponent: 3.0 }
    }
}

impl AllocationConfig {
    /// Check that the exponent is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(AggregateError::InvalidExponent(self.exponent));
        }
        Ok(())
    }
}

/// Weight assigned to one sector leader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Leader's company name.
    pub label: String,
    /// Leader's ticker.
    pub ticker: String,
    /// Sector the leader represents.
    pub sector_name: String,
    /// Share of the portfolio, in percent.
    pub weight_percent: f64,
}

/// Converts sector leader scores into portfolio weights.
#[derive(Debug, Clone)]
pub struct AllocationWeighter {
    config: AllocationConfig,
}

impl AllocationWeighter {
    /// Create a weighter, validating the configuration.
    pub fn new(config: AllocationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Current configuration.
    pub const fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Percent weights for a list of scores, aligned with the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use canning_rank::{AllocationConfig, AllocationWeighter};
    ///
    /// let weighter = AllocationWeighter::new(AllocationConfig::default()).unwrap();
    /// assert_eq!(weighter.weights(&[2.0, 0.0]), vec![100.0, 0.0]);
    /// assert_eq!(weighter.weights(&[0.0, 0.0]), vec![50.0, 50.0]);
    /// ```
    pub fn weights(&self, scores: &[f64]) -> Vec<f64> {
        if scores.is_empty() {
            return Vec::new();
        }

        let clamped: Vec<f64> = scores
            .iter()
            .map(|s| if s.is_finite() { s.max(0.0) } else { 0.0 })
            .collect();
        let max = clamped.iter().copied().fold(0.0, f64::max);
        if max <= 0.0 {
            return vec![TOTAL_WEIGHT / scores.len() as f64; scores.len()];
        }

        // Scaled into [0, 1] before the power, which keeps it finite.
        let raw: Vec<f64> = clamped
            .iter()
            .map(|s| (s / max).powf(self.config.exponent))
            .collect();
        let total: f64 = raw.iter().sum();
        raw.iter().map(|r| TOTAL_WEIGHT * r / total).collect()
    }

    /// Allocation across sector leaders, in leader order.
    pub fn allocate(&self, sectors: &[SectorGroup]) -> Vec<AllocationEntry> {
        let scores: Vec<f64> = sectors.iter().map(|s| s.leader.display_score()).collect();
        let allocation: Vec<AllocationEntry> = sectors
            .iter()
            .zip(self.weights(&scores))
            .map(|(sector, weight_percent)| AllocationEntry {
                label: sector.leader.company.record.label().to_string(),
                ticker: sector.leader.ticker().to_string(),
                sector_name: sector.sector_name.clone(),
                weight_percent,
            })
            .collect();

        debug!(
            leaders = allocation.len(),
            exponent = self.config.exponent,
            "computed allocation"
        );
        allocation
    }
}

impl Default for AllocationWeighter {
    fn default() -> Self {
        Self {
            config: AllocationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::RankedCompany;
    use approx::assert_relative_eq;
    use canning_data::CompanyRecord;
    use canning_factors::{MetricPercentiles, ScoredCompany};
    use rstest::rstest;

    fn group(sector: &str, ticker: &str, name: &str, score: f64) -> SectorGroup {
        SectorGroup {
            sector_name: sector.to_string(),
            leader: RankedCompany {
                rank: 1,
                company: ScoredCompany {
                    record: CompanyRecord::new(ticker, name, sector),
                    percentiles: MetricPercentiles::default(),
                    momentum_score: None,
                    quality_score: None,
                    display_score: score,
                },
            },
            member_count: 1,
        }
    }

    #[test]
    fn test_cubic_weights() {
        let weights = AllocationWeighter::default().weights(&[2.0, 1.0]);
        assert_relative_eq!(weights[0], 800.0 / 9.0, epsilon = 1e-9);
        assert_relative_eq!(weights[1], 100.0 / 9.0, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_exponent() {
        let weighter = AllocationWeighter::new(AllocationConfig { exponent: 1.0 }).unwrap();
        let weights = weighter.weights(&[75.0, 25.0]);
        assert_relative_eq!(weights[0], 75.0, epsilon = 1e-9);
        assert_relative_eq!(weights[1], 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_leader_gets_everything() {
        let allocation =
            AllocationWeighter::default().allocate(&[group("Tech", "B", "Beta Corp", 67.0)]);
        assert_eq!(allocation.len(), 1);
        assert_eq!(allocation[0].label, "Beta Corp");
        assert_eq!(allocation[0].sector_name, "Tech");
        assert_relative_eq!(allocation[0].weight_percent, 100.0);
    }

    #[test]
    fn test_label_falls_back_to_ticker() {
        let allocation = AllocationWeighter::default().allocate(&[group("Tech", "B", "", 67.0)]);
        assert_eq!(allocation[0].label, "B");
    }

    #[test]
    fn test_empty_leaders() {
        assert!(AllocationWeighter::default().allocate(&[]).is_empty());
    }

    #[test]
    fn test_all_zero_scores_split_equally() {
        let allocation = AllocationWeighter::default().allocate(&[
            group("Tech", "A", "Alpha", 0.0),
            group("Energy", "B", "Beta", 0.0),
            group("Health", "C", "Gamma", 0.0),
            group("Metals", "D", "Delta", 0.0),
        ]);
        for entry in &allocation {
            assert_relative_eq!(entry.weight_percent, 25.0);
        }
    }

    #[rstest]
    #[case(vec![10.0, 20.0, 30.0])]
    #[case(vec![99.9, 0.1])]
    #[case(vec![0.0, 0.0, 5.0])]
    #[case(vec![1e-6, 2e-6])]
    #[case(vec![100.0; 17])]
    fn test_weights_sum_to_hundred(#[case] scores: Vec<f64>) {
        let total: f64 = AllocationWeighter::default().weights(&scores).iter().sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-6);
    }

    #[rstest]
    #[case(200.0)]
    #[case(1000.0)]
    fn test_large_exponent_favours_the_best(#[case] exponent: f64) {
        let weighter = AllocationWeighter::new(AllocationConfig { exponent }).unwrap();
        let weights = weighter.weights(&[100.0, 50.0]);
        assert_relative_eq!(weights[0], 100.0, epsilon = 1e-9);
        assert!(weights[1] < 1e-9);
        assert!(weights.iter().all(|w| w.is_finite()));
    }

    #[test]
    fn test_weights_do_not_depend_on_score_scale() {
        let weighter = AllocationWeighter::new(AllocationConfig { exponent: 50.0 }).unwrap();
        let small = weighter.weights(&[2e-6, 1e-6]);
        let large = weighter.weights(&[2e6, 1e6]);
        for (a, b) in small.iter().zip(&large) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
        assert_relative_eq!(small.iter().sum::<f64>(), 100.0, epsilon = 1e-9);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_invalid_exponent(#[case] exponent: f64) {
        assert!(AllocationWeighter::new(AllocationConfig { exponent }).is_err());
    }
}
