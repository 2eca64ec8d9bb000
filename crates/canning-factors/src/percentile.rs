//! Cross-sectional percentile standings.
//!
//! A company's percentile on a metric is the share of the *other* reporting
//! companies it strictly outperforms, scaled to 0-100. The best reporter
//! scores 100 and the worst scores 0. Tied companies do not outperform each
//! other and share a percentile.
//!
//! Companies missing a metric get no percentile for it and do not count as
//! peers. With fewer than two reporters the standing is undefined and every
//! company gets `None`.

use crate::metric::{Direction, Metric};
use canning_data::CompanyRecord;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Upper bound of the percentile scale.
pub const PERCENTILE_SCALE: f64 = 100.0;

/// Compute percentile standings for one metric.
///
/// Output is aligned with `values`.
///
/// # Examples
///
/// ```
/// use canning_factors::{Direction, percentile_ranks};
///
/// let ranks = percentile_ranks(&[Some(0.2), Some(0.05), None], Direction::HigherIsBetter);
/// assert_eq!(ranks, vec![Some(100.0), Some(0.0), None]);
/// ```
pub fn percentile_ranks(values: &[Option<f64>], direction: Direction) -> Vec<Option<f64>> {
    let mut reported: Vec<f64> = values.iter().flatten().copied().collect();
    let n = reported.len();
    if n < 2 {
        return vec![None; values.len()];
    }

    reported.sort_by(f64::total_cmp);
    let peers = (n - 1) as f64;

    values
        .iter()
        .map(|value| {
            value.map(|x| {
                let outperformed = match direction {
                    Direction::HigherIsBetter => reported.partition_point(|&p| p < x),
                    Direction::LowerIsBetter => n - reported.partition_point(|&p| p <= x),
                };
                outperformed as f64 / peers * PERCENTILE_SCALE
            })
        })
        .collect()
}

/// Percentile standings of one company across every ranked metric.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricPercentiles {
    /// Revenue growth percentile
    pub revenue_growth: Option<f64>,
    /// Profit growth percentile
    pub profit_growth: Option<f64>,
    /// Return on assets percentile
    pub roa: Option<f64>,
    /// Return on equity percentile
    pub roe: Option<f64>,
    /// Debt to equity percentile (lower ratio ranks higher)
    pub debt_to_equity: Option<f64>,
    /// Current ratio percentile
    pub current_ratio: Option<f64>,
    /// Margins percentile
    pub margins: Option<f64>,
    /// Price to book percentile (lower ratio ranks higher)
    pub pb: Option<f64>,
    /// EV/EBITDA percentile (lower ratio ranks higher)
    pub ev_ebitda: Option<f64>,
}

impl MetricPercentiles {
    /// Percentile for a metric.
    pub const fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::RevenueGrowth => self.revenue_growth,
            Metric::ProfitGrowth => self.profit_growth,
            Metric::Roa => self.roa,
            Metric::Roe => self.roe,
            Metric::DebtToEquity => self.debt_to_equity,
            Metric::CurrentRatio => self.current_ratio,
            Metric::Margins => self.margins,
            Metric::PriceToBook => self.pb,
            Metric::EvEbitda => self.ev_ebitda,
        }
    }

    /// Set the percentile for a metric.
    pub const fn set(&mut self, metric: Metric, value: Option<f64>) {
        let slot = match metric {
            Metric::RevenueGrowth => &mut self.revenue_growth,
            Metric::ProfitGrowth => &mut self.profit_growth,
            Metric::Roa => &mut self.roa,
            Metric::Roe => &mut self.roe,
            Metric::DebtToEquity => &mut self.debt_to_equity,
            Metric::CurrentRatio => &mut self.current_ratio,
            Metric::Margins => &mut self.margins,
            Metric::PriceToBook => &mut self.pb,
            Metric::EvEbitda => &mut self.ev_ebitda,
        };
        *slot = value;
    }

    /// Iterate over `(metric, percentile)` pairs in [`Metric::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, Option<f64>)> + '_ {
        Metric::ALL.into_iter().map(|m| (m, self.get(m)))
    }
}

/// Ranks every company in a universe on every metric.
#[derive(Debug, Clone, Default)]
pub struct PercentileRanker;

impl PercentileRanker {
    /// Create a new ranker.
    pub const fn new() -> Self {
        Self
    }

    /// Percentiles for a single metric, aligned with `records`.
    pub fn rank_metric(&self, records: &[CompanyRecord], metric: Metric) -> Vec<Option<f64>> {
        let values: Vec<Option<f64>> = records.iter().map(|r| metric.value(r)).collect();
        let reporters = values.iter().flatten().count();
        if reporters < 2 && records.len() >= 2 {
            warn!(%metric, reporters, "percentile undefined: fewer than two reporters");
        }
        percentile_ranks(&values, metric.direction())
    }

    /// Percentiles for every metric, aligned with `records`.
    pub fn rank_all(&self, records: &[CompanyRecord]) -> Vec<MetricPercentiles> {
        let mut out = vec![MetricPercentiles::default(); records.len()];
        for metric in Metric::ALL {
            for (slot, pct) in out.iter_mut().zip(self.rank_metric(records, metric)) {
                slot.set(metric, pct);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use canning_data::FeedValue;
    use rstest::rstest;

    #[test]
    fn test_two_reporters_best_and_worst() {
        let ranks = percentile_ranks(&[Some(0.20), Some(0.05)], Direction::HigherIsBetter);
        assert_eq!(ranks, vec![Some(100.0), Some(0.0)]);
    }

    #[test]
    fn test_lower_is_better() {
        let ranks = percentile_ranks(&[Some(0.5), Some(0.2), Some(1.0)], Direction::LowerIsBetter);
        assert_eq!(ranks, vec![Some(50.0), Some(100.0), Some(0.0)]);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![None])]
    #[case(vec![Some(1.0)])]
    #[case(vec![Some(1.0), None, None])]
    fn test_fewer_than_two_reporters(#[case] values: Vec<Option<f64>>) {
        let ranks = percentile_ranks(&values, Direction::HigherIsBetter);
        assert_eq!(ranks.len(), values.len());
        assert!(ranks.iter().all(Option::is_none));
    }

    #[test]
    fn test_missing_excluded_from_peers() {
        let ranks = percentile_ranks(
            &[Some(3.0), None, Some(1.0), Some(2.0)],
            Direction::HigherIsBetter,
        );
        assert_eq!(ranks, vec![Some(100.0), None, Some(0.0), Some(50.0)]);
    }

    #[test]
    fn test_ties_share_percentile() {
        let ranks = percentile_ranks(
            &[Some(1.0), Some(2.0), Some(2.0), Some(3.0)],
            Direction::HigherIsBetter,
        );
        let ranks: Vec<f64> = ranks.into_iter().flatten().collect();
        assert_relative_eq!(ranks[0], 0.0);
        assert_relative_eq!(ranks[1], 100.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(ranks[2], 100.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(ranks[3], 100.0);
    }

    #[test]
    fn test_sentinel_not_treated_as_worst() {
        let records = vec![
            CompanyRecord {
                debt_to_equity: FeedValue::Reported(0.5),
                ..CompanyRecord::new("A", "Alpha", "Tech")
            },
            CompanyRecord {
                debt_to_equity: FeedValue::NotApplicable,
                ..CompanyRecord::new("B", "Beta", "Tech")
            },
            CompanyRecord {
                debt_to_equity: FeedValue::Reported(1.5),
                ..CompanyRecord::new("C", "Gamma", "Tech")
            },
        ];

        let ranks = PercentileRanker::new().rank_metric(&records, Metric::DebtToEquity);
        assert_eq!(ranks, vec![Some(100.0), None, Some(0.0)]);
    }

    #[test]
    fn test_rank_all_fills_every_metric() {
        let records = vec![
            CompanyRecord {
                roa: FeedValue::Reported(0.10),
                pb: FeedValue::Reported(3.0),
                ..CompanyRecord::new("A", "Alpha", "Tech")
            },
            CompanyRecord {
                roa: FeedValue::Reported(0.20),
                pb: FeedValue::Reported(1.0),
                ..CompanyRecord::new("B", "Beta", "Tech")
            },
        ];

        let pct = PercentileRanker::new().rank_all(&records);
        assert_eq!(pct[0].get(Metric::Roa), Some(0.0));
        assert_eq!(pct[1].get(Metric::Roa), Some(100.0));
        assert_eq!(pct[0].get(Metric::PriceToBook), Some(0.0));
        assert_eq!(pct[1].get(Metric::PriceToBook), Some(100.0));
        assert_eq!(pct[0].get(Metric::Margins), None);
    }

    #[test]
    fn test_set_and_iter() {
        let mut pct = MetricPercentiles::default();
        pct.set(Metric::EvEbitda, Some(42.0));
        assert_eq!(pct.ev_ebitda, Some(42.0));

        let present: Vec<Metric> = pct
            .iter()
            .filter_map(|(m, v)| v.map(|_| m))
            .collect();
        assert_eq!(present, vec![Metric::EvEbitda]);
    }
}
