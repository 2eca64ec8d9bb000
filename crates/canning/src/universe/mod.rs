//! The company universe for one snapshot.
//!
//! A [`Universe`] is the validated input to the engine: tickers are trimmed
//! and unique, and sector labels use one spelling per sector. It is built
//! fresh for every snapshot and never mutated by the engine.

pub mod sector;

pub use sector::{Sector, canonical_label};

use crate::error::{EngineError, Result};
use canning_data::{CompanyRecord, load_records};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::debug;

/// Validated, ordered set of companies for one snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Universe {
    records: Vec<CompanyRecord>,
}

impl Universe {
    /// Build a universe from feed records.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyTicker`] for a blank ticker and
    /// [`EngineError::DuplicateTicker`] when a ticker appears twice.
    pub fn from_records(records: Vec<CompanyRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut normalized = Vec::with_capacity(records.len());

        for (index, mut record) in records.into_iter().enumerate() {
            let ticker = record.ticker.trim().to_string();
            if ticker.is_empty() {
                return Err(EngineError::EmptyTicker(index));
            }
            if !seen.insert(ticker.clone()) {
                return Err(EngineError::DuplicateTicker(ticker));
            }
            record.ticker = ticker;
            record.sector = canonical_label(&record.sector);
            normalized.push(record);
        }

        debug!(companies = normalized.len(), "built universe");
        Ok(Self {
            records: normalized,
        })
    }

    /// Load and validate a snapshot file (JSON or CSV).
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_records(load_records(path)?)
    }

    /// Companies in input order.
    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    /// Get all tickers in the universe.
    pub fn symbols(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.ticker.as_str()).collect()
    }

    /// Check if a ticker is in the universe.
    pub fn contains(&self, ticker: &str) -> bool {
        self.records.iter().any(|r| r.ticker == ticker)
    }

    /// Look up a company by ticker.
    pub fn get(&self, ticker: &str) -> Option<&CompanyRecord> {
        self.records.iter().find(|r| r.ticker == ticker)
    }

    /// Get the number of constituents.
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the universe has no companies.
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of companies per sector label, blanks included as-is.
    pub fn sector_counts(&self) -> BTreeMap<&str, usize> {
        self.records.iter().fold(BTreeMap::new(), |mut counts, r| {
            *counts.entry(r.sector.as_str()).or_insert(0) += 1;
            counts
        })
    }
}

impl TryFrom<Vec<CompanyRecord>> for Universe {
    type Error = EngineError;

    fn try_from(records: Vec<CompanyRecord>) -> Result<Self> {
        Self::from_records(records)
    }
}
