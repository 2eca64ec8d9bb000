#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/canning/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod record;
pub mod snapshot;
pub mod value;

pub use error::{DataError, Result};
pub use record::CompanyRecord;
pub use snapshot::{FeedFormat, load_records};
pub use value::{FeedValue, NOT_APPLICABLE};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
