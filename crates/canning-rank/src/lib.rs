#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/canning/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod allocation;
pub mod bundle;
pub mod error;
pub mod ranking;
pub mod sector;

// Re-export main types
pub use allocation::{AllocationConfig, AllocationEntry, AllocationWeighter, TOTAL_WEIGHT};
pub use bundle::DerivedBundle;
pub use error::{AggregateError, Result};
pub use ranking::{RankedCompany, RankingAggregator, UniverseSummary, rank_order};
pub use sector::{
    SectorAggregator, SectorConfig, SectorGroup, UNCATEGORIZED, UNKNOWN, sector_label,
};
