//! Reading and writing snapshot feed files.
//!
//! A snapshot is a flat list of [`CompanyRecord`]s, either as a JSON array or
//! as CSV with a header row. Unknown columns are ignored; known columns with
//! the wrong type are reported as errors.

use crate::error::{DataError, Result};
use crate::record::CompanyRecord;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::debug;

/// Supported snapshot file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    /// JSON array of records.
    Json,
    /// CSV with a header row.
    Csv,
}

impl FeedFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(DataError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// File extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Parse records from a JSON array.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<CompanyRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse records from CSV with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<CompanyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Parse records in the given format.
pub fn read_records<R: Read>(reader: R, format: FeedFormat) -> Result<Vec<CompanyRecord>> {
    match format {
        FeedFormat::Json => read_json(reader),
        FeedFormat::Csv => read_csv(reader),
    }
}

/// Load a snapshot file, inferring the format from its extension.
pub fn load_records(path: &Path) -> Result<Vec<CompanyRecord>> {
    let format = FeedFormat::from_path(path)?;
    let file = File::open(path)?;
    let records = read_records(BufReader::new(file), format)?;

    debug!(
        path = %path.display(),
        format = format.extension(),
        count = records.len(),
        "loaded snapshot feed"
    );

    Ok(records)
}

/// Write records back out as a JSON array.
///
/// Sentinel values are written as `-999` and absent fields are omitted, so
/// a feed read with [`read_json`] comes back unchanged.
pub fn write_json<W: Write>(writer: W, records: &[CompanyRecord]) -> Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}
