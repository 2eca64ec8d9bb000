#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/canning/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod frame;
pub mod report;
pub mod summary;

pub use export::{
    ExportError, ExportFormat, Exporter, RankingRow, SectorRow, export_bundle, ranking_rows,
    sector_rows,
};
pub use frame::{ranking_frame, rows_frame};
pub use report::{Report, ReportBuilder, ReportError};
pub use summary::{BundleSummary, format_growth, format_large_number, format_score};
