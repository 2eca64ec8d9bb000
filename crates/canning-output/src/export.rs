//! CSV and JSON export of the derived bundle.
//!
//! Nested bundle types do not map onto CSV columns, so each table is first
//! flattened into a row type. Raw inputs are written in their feed form:
//! "not applicable" goes back out as `-999` and absent values as empty cells.

use canning_rank::{AllocationEntry, DerivedBundle, RankedCompany, SectorGroup};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer produced invalid UTF-8.
    #[error("Invalid UTF-8 in output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Table construction error.
    #[error("Table error: {0}")]
    Table(#[from] polars::error::PolarsError),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }

    /// Parse a format name (`csv`, `json`, `pretty-json`).
    pub fn from_name(name: &str) -> Result<Self, ExportError> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" | "pretty" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// One line of the ranking table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingRow {
    /// Position in the universe.
    pub rank: usize,
    /// Ticker symbol.
    pub ticker: String,
    /// Company name.
    pub name: String,
    /// Sector label.
    pub sector: String,
    /// Category label.
    pub category: String,
    /// Composite display score.
    pub display_score: f64,
    /// Momentum sub-score.
    pub momentum_score: Option<f64>,
    /// Quality sub-score.
    pub quality_score: Option<f64>,
    /// Percentile of the category-relevant valuation metric.
    pub valuation_percentile: Option<f64>,
    /// Raw market cap.
    pub market_cap: Option<f64>,
    /// Raw price.
    pub price: Option<f64>,
    /// Raw revenue growth.
    pub revenue_growth: Option<f64>,
    /// Raw profit growth.
    pub profit_growth: Option<f64>,
    /// Raw return on assets.
    pub roa: Option<f64>,
    /// Raw return on equity.
    pub roe: Option<f64>,
    /// Raw debt to equity.
    pub debt_to_equity: Option<f64>,
    /// Raw current ratio.
    pub current_ratio: Option<f64>,
    /// Raw price to book.
    pub pb: Option<f64>,
    /// Raw EV/EBITDA.
    pub ev_ebitda: Option<f64>,
    /// Raw margins.
    pub margins: Option<f64>,
}

impl From<&RankedCompany> for RankingRow {
    fn from(ranked: &RankedCompany) -> Self {
        let company = &ranked.company;
        let record = &company.record;
        Self {
            rank: ranked.rank,
            ticker: record.ticker.clone(),
            name: record.name.clone(),
            sector: record.sector.clone(),
            category: record.category.clone(),
            display_score: company.display_score,
            momentum_score: company.momentum_score,
            quality_score: company.quality_score,
            valuation_percentile: company.valuation_percentile(),
            market_cap: record.market_cap.to_raw(),
            price: record.price.to_raw(),
            revenue_growth: record.revenue_growth.to_raw(),
            profit_growth: record.profit_growth.to_raw(),
            roa: record.roa.to_raw(),
            roe: record.roe.to_raw(),
            debt_to_equity: record.debt_to_equity.to_raw(),
            current_ratio: record.current_ratio.to_raw(),
            pb: record.pb.to_raw(),
            ev_ebitda: record.ev_ebitda.to_raw(),
            margins: record.margins.to_raw(),
        }
    }
}

/// One line of the sector leader table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectorRow {
    /// Sector label.
    pub sector_name: String,
    /// Leader's ticker.
    pub leader_ticker: String,
    /// Leader's company name.
    pub leader_name: String,
    /// Leader's display score.
    pub leader_score: f64,
    /// Leader's rank in the universe.
    pub leader_rank: usize,
    /// Companies in the sector.
    pub member_count: usize,
}

impl From<&SectorGroup> for SectorRow {
    fn from(group: &SectorGroup) -> Self {
        Self {
            sector_name: group.sector_name.clone(),
            leader_ticker: group.leader.ticker().to_string(),
            leader_name: group.leader.company.record.name.clone(),
            leader_score: group.leader.display_score(),
            leader_rank: group.leader.rank,
            member_count: group.member_count,
        }
    }
}

/// Flatten the ranking into rows.
pub fn ranking_rows(bundle: &DerivedBundle) -> Vec<RankingRow> {
    bundle.companies.iter().map(RankingRow::from).collect()
}

/// Flatten the sector leaders into rows.
pub fn sector_rows(bundle: &DerivedBundle) -> Vec<SectorRow> {
    bundle.sectors.iter().map(SectorRow::from).collect()
}

fn rows_to_string<T: Serialize>(rows: &[T], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            for row in rows {
                wtr.serialize(row)?;
            }
            let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8(bytes)?)
        }
        ExportFormat::Json => Ok(serde_json::to_string(rows)?),
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(rows)?),
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for Vec<RankingRow> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        rows_to_string(self, format)
    }
}

impl Exporter for Vec<SectorRow> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        rows_to_string(self, format)
    }
}

impl Exporter for Vec<AllocationEntry> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        rows_to_string(self, format)
    }
}

impl Exporter for DerivedBundle {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => Err(ExportError::InvalidFormat(
                "bundle has no single-table CSV form; export its tables instead".to_string(),
            )),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Write the ranking, sector and allocation tables into `dir`.
///
/// Files are named `ranking`, `sectors` and `allocation` with the format's
/// extension. JSON exports also write the whole bundle as `bundle.json`.
/// Returns the paths written.
pub fn export_bundle(
    bundle: &DerivedBundle,
    dir: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir)?;
    let ext = format.extension();
    let mut written = Vec::new();

    let ranking = dir.join(format!("ranking.{ext}"));
    ranking_rows(bundle).export_to_file(&ranking, format)?;
    written.push(ranking);

    let sectors = dir.join(format!("sectors.{ext}"));
    sector_rows(bundle).export_to_file(&sectors, format)?;
    written.push(sectors);

    let allocation = dir.join(format!("allocation.{ext}"));
    bundle.allocation.export_to_file(&allocation, format)?;
    written.push(allocation);

    if format != ExportFormat::Csv {
        let whole = dir.join("bundle.json");
        bundle.export_to_file(&whole, format)?;
        written.push(whole);
    }

    Ok(written)
}
