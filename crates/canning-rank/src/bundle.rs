//! The derived result set handed to presentation.

use crate::allocation::AllocationEntry;
use crate::ranking::{RankedCompany, UniverseSummary};
use crate::sector::SectorGroup;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything derived from one universe snapshot.
///
/// A bundle is built in a single pass and never mutated afterwards; a new
/// snapshot produces a new bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedBundle {
    /// When the bundle was computed.
    pub as_of: DateTime<Utc>,
    /// Ranked companies, best first.
    pub companies: Vec<RankedCompany>,
    /// Universe statistics.
    pub summary: UniverseSummary,
    /// Sector leaders, best first.
    pub sectors: Vec<SectorGroup>,
    /// Allocation across sector leaders.
    pub allocation: Vec<AllocationEntry>,
}

impl DerivedBundle {
    /// An empty bundle stamped with the given time.
    pub fn empty(as_of: DateTime<Utc>) -> Self {
        Self {
            as_of,
            companies: Vec::new(),
            summary: UniverseSummary::default(),
            sectors: Vec::new(),
            allocation: Vec::new(),
        }
    }

    /// Whether the universe had no companies.
    pub const fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Look up a ranked company by ticker.
    pub fn company(&self, ticker: &str) -> Option<&RankedCompany> {
        self.companies.iter().find(|c| c.ticker() == ticker)
    }

    /// The `n` best-ranked companies.
    pub fn top(&self, n: usize) -> &[RankedCompany] {
        &self.companies[..n.min(self.companies.len())]
    }

    /// Sector group for a sector label.
    pub fn sector(&self, name: &str) -> Option<&SectorGroup> {
        self.sectors.iter().find(|s| s.sector_name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::RankingAggregator;
    use canning_data::CompanyRecord;
    use canning_factors::{MetricPercentiles, ScoredCompany};

    fn bundle() -> DerivedBundle {
        let companies = ["A", "B", "C"]
            .iter()
            .zip([10.0, 30.0, 20.0])
            .map(|(t, score)| ScoredCompany {
                record: CompanyRecord::new(*t, *t, "Tech"),
                percentiles: MetricPercentiles::default(),
                momentum_score: None,
                quality_score: None,
                display_score: score,
            })
            .collect();

        DerivedBundle {
            companies: RankingAggregator::new().rank(companies),
            ..DerivedBundle::empty(Utc::now())
        }
    }

    #[test]
    fn test_top_clamps_to_length() {
        let bundle = bundle();
        let top: Vec<&str> = bundle.top(2).iter().map(RankedCompany::ticker).collect();
        assert_eq!(top, vec!["B", "C"]);
        assert_eq!(bundle.top(10).len(), 3);
        assert!(bundle.top(0).is_empty());
    }

    #[test]
    fn test_company_lookup() {
        let bundle = bundle();
        assert_eq!(bundle.company("C").map(|c| c.rank), Some(2));
        assert!(bundle.company("Z").is_none());
    }

    #[test]
    fn test_empty_bundle() {
        let bundle = DerivedBundle::empty(Utc::now());
        assert!(bundle.is_empty());
        assert!(bundle.top(5).is_empty());
        assert!(bundle.sector("Tech").is_none());
    }
}
