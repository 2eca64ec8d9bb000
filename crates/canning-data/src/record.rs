//! Company records as delivered by the snapshot feed.

use crate::value::FeedValue;
use serde::{Deserialize, Deserializer, Serialize};

/// Category label that selects price-to-book as the relevant valuation metric.
pub const BANKING_AND_FINANCE: &str = "Banking & Finance";

/// One index constituent in a snapshot.
///
/// Field names match the feed contract; `symbol` and `company` are accepted
/// as aliases for `ticker` and `name`. Every metric may be absent or carry
/// the `-999` sentinel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Ticker symbol, unique within a universe.
    #[serde(alias = "symbol")]
    pub ticker: String,

    /// Company name.
    #[serde(default, alias = "company", deserialize_with = "null_as_empty")]
    pub name: String,

    /// Sector label. Empty, `Unknown` and `Uncategorized` are valid.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sector: String,

    /// Broad category, e.g. `Banking & Finance`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,

    /// Market capitalization.
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub market_cap: FeedValue,

    /// Last price.
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub price: FeedValue,

    /// Trailing revenue.
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub revenue: FeedValue,

    /// Year-over-year revenue growth (fraction).
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub revenue_growth: FeedValue,

    /// Year-over-year profit growth (fraction).
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub profit_growth: FeedValue,

    /// Return on assets.
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub roa: FeedValue,

    /// Debt to equity ratio.
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub debt_to_equity: FeedValue,

    /// Current ratio.
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub current_ratio: FeedValue,

    /// Return on equity.
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub roe: FeedValue,

    /// Price to book.
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub pb: FeedValue,

    /// Enterprise value to EBITDA.
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub ev_ebitda: FeedValue,

    /// Profit margins.
    #[serde(default, skip_serializing_if = "FeedValue::is_absent")]
    pub margins: FeedValue,
}

impl CompanyRecord {
    /// Create a record with only identity fields set.
    pub fn new(ticker: impl Into<String>, name: impl Into<String>, sector: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            sector: sector.into(),
            ..Self::default()
        }
    }

    /// Whether price-to-book (rather than EV/EBITDA) is the relevant valuation metric.
    pub fn is_banking_and_finance(&self) -> bool {
        self.category.trim().eq_ignore_ascii_case(BANKING_AND_FINANCE)
    }

    /// Name to show for this company, falling back to the ticker.
    pub fn label(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.ticker
        } else {
            &self.name
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
