//! Ranked metrics and their comparison direction.

use canning_data::CompanyRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which raw value wins a peer comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Larger raw values outperform (growth, profitability, liquidity).
    HigherIsBetter,
    /// Smaller raw values outperform (leverage and valuation ratios).
    LowerIsBetter,
}

/// A metric that receives a percentile standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Year-over-year revenue growth
    RevenueGrowth,
    /// Year-over-year profit growth
    ProfitGrowth,
    /// Return on assets
    Roa,
    /// Return on equity
    Roe,
    /// Debt to equity
    DebtToEquity,
    /// Current ratio
    CurrentRatio,
    /// Profit margins
    Margins,
    /// Price to book
    #[serde(rename = "pb")]
    PriceToBook,
    /// Enterprise value to EBITDA
    EvEbitda,
}

impl Metric {
    /// Number of ranked metrics.
    pub const COUNT: usize = 9;

    /// Every ranked metric, in a fixed order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::RevenueGrowth,
        Self::ProfitGrowth,
        Self::Roa,
        Self::Roe,
        Self::DebtToEquity,
        Self::CurrentRatio,
        Self::Margins,
        Self::PriceToBook,
        Self::EvEbitda,
    ];

    /// Feed field name for this metric.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RevenueGrowth => "revenue_growth",
            Self::ProfitGrowth => "profit_growth",
            Self::Roa => "roa",
            Self::Roe => "roe",
            Self::DebtToEquity => "debt_to_equity",
            Self::CurrentRatio => "current_ratio",
            Self::Margins => "margins",
            Self::PriceToBook => "pb",
            Self::EvEbitda => "ev_ebitda",
        }
    }

    /// Comparison direction for this metric.
    pub const fn direction(&self) -> Direction {
        match self {
            Self::DebtToEquity | Self::PriceToBook | Self::EvEbitda => Direction::LowerIsBetter,
            _ => Direction::HigherIsBetter,
        }
    }

    /// Position of this metric in [`Metric::ALL`].
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a metric by its feed field name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Resolved raw value of this metric for a record.
    pub const fn value(&self, record: &CompanyRecord) -> Option<f64> {
        let raw = match self {
            Self::RevenueGrowth => record.revenue_growth,
            Self::ProfitGrowth => record.profit_growth,
            Self::Roa => record.roa,
            Self::Roe => record.roe,
            Self::DebtToEquity => record.debt_to_equity,
            Self::CurrentRatio => record.current_ratio,
            Self::Margins => record.margins,
            Self::PriceToBook => record.pb,
            Self::EvEbitda => record.ev_ebitda,
        };
        raw.resolve()
    }

    /// Valuation metric that matters for a record's category.
    pub fn valuation_for(record: &CompanyRecord) -> Self {
        if record.is_banking_and_finance() {
            Self::PriceToBook
        } else {
            Self::EvEbitda
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
