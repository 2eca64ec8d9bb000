#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/canning/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod composite;
pub mod error;
pub mod metric;
pub mod momentum;
pub mod percentile;
pub mod quality;
pub mod registry;
pub mod score;

pub use composite::{CompositeScorer, ScoredCompany, ScoringConfig};
pub use error::{Result, ScoringError};
pub use metric::{Direction, Metric};
pub use momentum::{MomentumConfig, MomentumScore};
pub use percentile::{MetricPercentiles, PERCENTILE_SCALE, PercentileRanker, percentile_ranks};
pub use quality::{QualityConfig, QualityScore};
pub use score::{Configurable, MissingPolicy, SubScore, combine};

// Re-export registry types for convenience
pub use registry::{
    MetricCategory, MetricInfo, available_metrics, get_metric_info, metrics_by_category,
};
