//! Universe ranking and summary statistics.

use canning_factors::ScoredCompany;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Total order used for ranking and leadership.
///
/// Higher display score first; equal scores fall back to ticker ascending,
/// so the order is reproducible for identical input.
pub fn rank_order(a: &ScoredCompany, b: &ScoredCompany) -> Ordering {
    b.display_score
        .total_cmp(&a.display_score)
        .then_with(|| a.ticker().cmp(b.ticker()))
}

/// A scored company with its 1-based position in the universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCompany {
    /// Position after sorting, starting at 1.
    pub rank: usize,
    /// Scores and input record.
    #[serde(flatten)]
    pub company: ScoredCompany,
}

impl RankedCompany {
    /// Ticker of the underlying record.
    pub fn ticker(&self) -> &str {
        self.company.ticker()
    }

    /// Composite display score.
    pub const fn display_score(&self) -> f64 {
        self.company.display_score
    }
}

/// Universe-wide statistics.
///
/// Missing inputs are skipped, never counted as zero. Each statistic is
/// `None` when no company reports the underlying value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UniverseSummary {
    /// Number of companies in the universe.
    pub company_count: usize,
    /// Sum of reported market caps.
    pub total_market_cap: Option<f64>,
    /// Companies that reported a market cap.
    pub market_cap_coverage: usize,
    /// Mean of reported revenue growth.
    pub average_growth: Option<f64>,
    /// Companies that reported revenue growth.
    pub growth_coverage: usize,
    /// Mean display score.
    pub average_display_score: Option<f64>,
}

impl UniverseSummary {
    /// Summarize a scored universe.
    pub fn from_companies(companies: &[ScoredCompany]) -> Self {
        let market_caps: Vec<f64> = companies
            .iter()
            .filter_map(|c| c.record.market_cap.resolve())
            .collect();
        let growth: Vec<f64> = companies
            .iter()
            .filter_map(|c| c.record.revenue_growth.resolve())
            .collect();
        let scores: Vec<f64> = companies.iter().map(|c| c.display_score).collect();

        Self {
            company_count: companies.len(),
            total_market_cap: (!market_caps.is_empty()).then(|| market_caps.iter().sum()),
            market_cap_coverage: market_caps.len(),
            average_growth: mean(&growth),
            growth_coverage: growth.len(),
            average_display_score: mean(&scores),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sorts a scored universe and assigns ranks.
#[derive(Debug, Clone, Default)]
pub struct RankingAggregator;

impl RankingAggregator {
    /// Create a new aggregator.
    pub const fn new() -> Self {
        Self
    }

    /// Sort by [`rank_order`] and assign ranks `1..N`.
    pub fn rank(&self, mut companies: Vec<ScoredCompany>) -> Vec<RankedCompany> {
        companies.sort_by(rank_order);
        let ranked: Vec<RankedCompany> = companies
            .into_iter()
            .enumerate()
            .map(|(i, company)| RankedCompany {
                rank: i + 1,
                company,
            })
            .collect();

        if let Some(top) = ranked.first() {
            debug!(
                companies = ranked.len(),
                top = top.ticker(),
                score = top.display_score(),
                "ranked universe"
            );
        }
        ranked
    }

    /// Compute universe statistics.
    pub fn summarize(&self, companies: &[ScoredCompany]) -> UniverseSummary {
        UniverseSummary::from_companies(companies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use canning_data::{CompanyRecord, FeedValue};
    use canning_factors::MetricPercentiles;

    fn scored(ticker: &str, score: f64) -> ScoredCompany {
        ScoredCompany {
            record: CompanyRecord::new(ticker, ticker, "Tech"),
            percentiles: MetricPercentiles::default(),
            momentum_score: None,
            quality_score: None,
            display_score: score,
        }
    }

    #[test]
    fn test_rank_descending() {
        let ranked = RankingAggregator::new().rank(vec![
            scored("A", 10.0),
            scored("B", 90.0),
            scored("C", 50.0),
        ]);

        let order: Vec<(&str, usize)> = ranked.iter().map(|r| (r.ticker(), r.rank)).collect();
        assert_eq!(order, vec![("B", 1), ("C", 2), ("A", 3)]);
    }

    #[test]
    fn test_ties_broken_by_ticker() {
        let ranked = RankingAggregator::new().rank(vec![
            scored("ZED", 50.0),
            scored("ALP", 50.0),
            scored("MID", 50.0),
        ]);

        let tickers: Vec<&str> = ranked.iter().map(RankedCompany::ticker).collect();
        assert_eq!(tickers, vec!["ALP", "MID", "ZED"]);
    }

    #[test]
    fn test_rank_is_independent_of_input_order() {
        let forward = RankingAggregator::new().rank(vec![
            scored("A", 20.0),
            scored("B", 20.0),
            scored("C", 70.0),
        ]);
        let backward = RankingAggregator::new().rank(vec![
            scored("C", 70.0),
            scored("B", 20.0),
            scored("A", 20.0),
        ]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_rank_empty() {
        assert!(RankingAggregator::new().rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_summary_skips_missing() {
        let mut a = scored("A", 40.0);
        a.record.market_cap = FeedValue::from(1000.0);
        a.record.revenue_growth = FeedValue::from(0.20);
        let mut b = scored("B", 60.0);
        b.record.market_cap = FeedValue::from(2000.0);
        b.record.revenue_growth = FeedValue::NotApplicable;
        let c = scored("C", 20.0);

        let summary = RankingAggregator::new().summarize(&[a, b, c]);
        assert_eq!(summary.company_count, 3);
        assert_eq!(summary.total_market_cap, Some(3000.0));
        assert_eq!(summary.market_cap_coverage, 2);
        assert_relative_eq!(summary.average_growth.unwrap(), 0.20);
        assert_eq!(summary.growth_coverage, 1);
        assert_relative_eq!(summary.average_display_score.unwrap(), 40.0);
    }

    #[test]
    fn test_summary_without_market_caps_is_not_zero() {
        let summary = UniverseSummary::from_companies(&[scored("A", 10.0)]);
        assert_eq!(summary.total_market_cap, None);
        assert_eq!(summary.market_cap_coverage, 0);
    }

    #[test]
    fn test_summary_empty() {
        let summary = UniverseSummary::from_companies(&[]);
        assert_eq!(summary.company_count, 0);
        assert_eq!(summary.average_growth, None);
        assert_eq!(summary.average_display_score, None);
        assert_eq!(summary.total_market_cap, None);
    }
}
