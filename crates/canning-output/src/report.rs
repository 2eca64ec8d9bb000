//! JSON reports built from a derived bundle.

use canning_rank::DerivedBundle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A report on one ranking snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report title.
    pub title: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// When the underlying bundle was computed.
    pub as_of: Option<DateTime<Utc>>,

    /// Number of ranked companies included, if limited.
    pub top: Option<usize>,

    /// Report contents (JSON format).
    pub contents: serde_json::Value,
}

impl Report {
    /// Create a new report.
    pub fn new(title: String, contents: serde_json::Value) -> Self {
        Self {
            title,
            timestamp: Utc::now(),
            as_of: None,
            top: None,
            contents,
        }
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON to `path`.
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder<'a> {
    title: Option<String>,
    top: Option<usize>,
    bundle: Option<&'a DerivedBundle>,
}

impl<'a> ReportBuilder<'a> {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Include only the first `n` ranked companies.
    pub const fn top(mut self, n: usize) -> Self {
        self.top = Some(n);
        self
    }

    /// Set the bundle to report on.
    pub const fn bundle(mut self, bundle: &'a DerivedBundle) -> Self {
        self.bundle = Some(bundle);
        self
    }

    /// Build the report.
    ///
    /// Contents hold `summary`, `companies`, `sectors` and `allocation`; an
    /// empty report carries `null` contents.
    pub fn build(self) -> Result<Report, ReportError> {
        let title = self
            .title
            .unwrap_or_else(|| "Company Rankings".to_string());

        let Some(bundle) = self.bundle else {
            return Ok(Report::new(title, serde_json::Value::Null));
        };

        let companies = match self.top {
            Some(n) => bundle.top(n),
            None => &bundle.companies,
        };
        let contents = serde_json::json!({
            "summary": serde_json::to_value(&bundle.summary)?,
            "companies": serde_json::to_value(companies)?,
            "sectors": serde_json::to_value(&bundle.sectors)?,
            "allocation": serde_json::to_value(&bundle.allocation)?,
        });

        Ok(Report {
            as_of: Some(bundle.as_of),
            top: self.top,
            ..Report::new(title, contents)
        })
    }
}
