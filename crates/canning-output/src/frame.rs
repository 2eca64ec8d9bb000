//! Tabular view of the ranking as a polars [`DataFrame`].

use crate::export::{ExportError, RankingRow, ranking_rows};
use canning_rank::DerivedBundle;
use polars::prelude::*;

/// Build a data frame with one row per ranked company.
///
/// Columns: rank, ticker, name, sector, display, momentum, quality,
/// valuation. Missing sub-scores become nulls.
pub fn ranking_frame(bundle: &DerivedBundle) -> Result<DataFrame, ExportError> {
    rows_frame(&ranking_rows(bundle))
}

/// Build a data frame from already flattened ranking rows.
pub fn rows_frame(rows: &[RankingRow]) -> Result<DataFrame, ExportError> {
    let ranks: Vec<u64> = rows.iter().map(|r| r.rank as u64).collect();
    let tickers: Vec<&str> = rows.iter().map(|r| r.ticker.as_str()).collect();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    let sectors: Vec<&str> = rows.iter().map(|r| r.sector.as_str()).collect();
    let display: Vec<f64> = rows.iter().map(|r| r.display_score).collect();
    let momentum: Vec<Option<f64>> = rows.iter().map(|r| r.momentum_score).collect();
    let quality: Vec<Option<f64>> = rows.iter().map(|r| r.quality_score).collect();
    let valuation: Vec<Option<f64>> = rows.iter().map(|r| r.valuation_percentile).collect();

    let df = DataFrame::new(vec![
        Series::new("rank".into(), ranks).into(),
        Series::new("ticker".into(), tickers).into(),
        Series::new("name".into(), names).into(),
        Series::new("sector".into(), sectors).into(),
        Series::new("display".into(), display).into(),
        Series::new("momentum".into(), momentum).into(),
        Series::new("quality".into(), quality).into(),
        Series::new("valuation".into(), valuation).into(),
    ])?;

    Ok(df)
}
