//! Sector grouping and leadership.
//!
//! Companies are folded once into an ordered map from sector label to
//! members; leaders are derived from that map afterwards. Sectors on the
//! exclusion list are dropped from the leader list only. They still count
//! toward the universe summary, which is computed on the whole universe.

use crate::ranking::{RankedCompany, rank_order};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Label used for companies without a sector.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Label the feed uses for companies it could not classify.
pub const UNKNOWN: &str = "Unknown";

/// Configuration for sector grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorConfig {
    /// Sector labels left out of the leader list (default: Unknown, Uncategorized)
    pub excluded: Vec<String>,
}

impl Default for SectorConfig {
    fn default() -> Self {
        Self {
            excluded: vec![UNKNOWN.to_string(), UNCATEGORIZED.to_string()],
        }
    }
}

impl SectorConfig {
    /// Whether a sector label is on the exclusion list. Case-insensitive.
    pub fn is_excluded(&self, sector: &str) -> bool {
        self.excluded
            .iter()
            .any(|e| e.trim().eq_ignore_ascii_case(sector.trim()))
    }
}

/// Normalized sector label for grouping. Blank sectors become [`UNCATEGORIZED`].
pub fn sector_label(sector: &str) -> &str {
    let trimmed = sector.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED
    } else {
        trimmed
    }
}

/// One sector with its leading company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorGroup {
    /// Sector label.
    pub sector_name: String,
    /// Member with the highest display score.
    pub leader: RankedCompany,
    /// Number of companies in the sector.
    pub member_count: usize,
}

/// Groups a ranked universe by sector.
#[derive(Debug, Clone, Default)]
pub struct SectorAggregator {
    config: SectorConfig,
}

impl SectorAggregator {
    /// Create an aggregator with the given configuration.
    pub const fn new(config: SectorConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub const fn config(&self) -> &SectorConfig {
        &self.config
    }

    /// Map from sector label to members, in input order.
    pub fn members<'a>(&self, ranked: &'a [RankedCompany]) -> BTreeMap<&'a str, Vec<&'a RankedCompany>> {
        ranked.iter().fold(BTreeMap::new(), |mut groups, company| {
            groups
                .entry(sector_label(&company.company.record.sector))
                .or_insert_with(Vec::new)
                .push(company);
            groups
        })
    }

    /// Every sector including excluded ones, ordered by leader.
    pub fn group_all(&self, ranked: &[RankedCompany]) -> Vec<SectorGroup> {
        let mut groups: Vec<SectorGroup> = self
            .members(ranked)
            .into_iter()
            .filter_map(|(sector, members)| {
                let leader = members
                    .iter()
                    .copied()
                    .min_by(|a, b| rank_order(&a.company, &b.company))?;
                Some(SectorGroup {
                    sector_name: sector.to_string(),
                    leader: leader.clone(),
                    member_count: members.len(),
                })
            })
            .collect();

        groups.sort_by(|a, b| rank_order(&a.leader.company, &b.leader.company));
        groups
    }

    /// Sector leaders with excluded sectors removed, ordered by leader score.
    pub fn leaders(&self, ranked: &[RankedCompany]) -> Vec<SectorGroup> {
        let (kept, dropped): (Vec<SectorGroup>, Vec<SectorGroup>) = self
            .group_all(ranked)
            .into_iter()
            .partition(|g| !self.config.is_excluded(&g.sector_name));

        debug!(
            sectors = kept.len(),
            excluded = dropped.len(),
            "selected sector leaders"
        );
        kept
    }
}
