//! Feed sector names and their aliases.
//!
//! The snapshot feed labels companies with the market-data provider's
//! sector names. Other sources use the GICS spelling for the same sector
//! ("Information Technology" for "Technology"), so labels are mapped onto one
//! canonical name before grouping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-level sectors (11 sectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    /// Technology
    Technology,

    /// Healthcare
    Healthcare,

    /// Financial Services
    FinancialServices,

    /// Consumer Cyclical
    ConsumerCyclical,

    /// Communication Services
    CommunicationServices,

    /// Industrials
    Industrials,

    /// Consumer Defensive
    ConsumerDefensive,

    /// Energy
    Energy,

    /// Utilities
    Utilities,

    /// Real Estate
    RealEstate,

    /// Basic Materials
    BasicMaterials,
}

impl Sector {
    /// Returns all sectors.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Technology,
            Self::Healthcare,
            Self::FinancialServices,
            Self::ConsumerCyclical,
            Self::CommunicationServices,
            Self::Industrials,
            Self::ConsumerDefensive,
            Self::Energy,
            Self::Utilities,
            Self::RealEstate,
            Self::BasicMaterials,
        ]
    }

    /// Returns the canonical sector name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::FinancialServices => "Financial Services",
            Self::ConsumerCyclical => "Consumer Cyclical",
            Self::CommunicationServices => "Communication Services",
            Self::Industrials => "Industrials",
            Self::ConsumerDefensive => "Consumer Defensive",
            Self::Energy => "Energy",
            Self::Utilities => "Utilities",
            Self::RealEstate => "Real Estate",
            Self::BasicMaterials => "Basic Materials",
        }
    }

    /// GICS name of the closest level-1 sector.
    pub const fn gics_name(&self) -> &'static str {
        match self {
            Self::Technology => "Information Technology",
            Self::Healthcare => "Health Care",
            Self::FinancialServices => "Financials",
            Self::ConsumerCyclical => "Consumer Discretionary",
            Self::CommunicationServices => "Communication Services",
            Self::Industrials => "Industrials",
            Self::ConsumerDefensive => "Consumer Staples",
            Self::Energy => "Energy",
            Self::Utilities => "Utilities",
            Self::RealEstate => "Real Estate",
            Self::BasicMaterials => "Materials",
        }
    }

    /// Parse a sector from either its canonical or its GICS name.
    ///
    /// Matching ignores case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all().into_iter().find(|s| {
            s.name().eq_ignore_ascii_case(label) || s.gics_name().eq_ignore_ascii_case(label)
        })
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Canonical spelling of a sector label.
///
/// Known sectors map to [`Sector::name`]; anything else, including
/// `"Unknown"` and blanks, is returned trimmed.
pub fn canonical_label(label: &str) -> String {
    Sector::from_label(label).map_or_else(|| label.trim().to_string(), |s| s.name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_all_sectors() {
        let sectors = Sector::all();
        assert_eq!(sectors.len(), 11);
    }

    #[rstest]
    #[case("Technology", Some(Sector::Technology))]
    #[case("information technology", Some(Sector::Technology))]
    #[case("  Financials ", Some(Sector::FinancialServices))]
    #[case("Health Care", Some(Sector::Healthcare))]
    #[case("Materials", Some(Sector::BasicMaterials))]
    #[case("Unknown", None)]
    #[case("", None)]
    fn test_from_label(#[case] label: &str, #[case] expected: Option<Sector>) {
        assert_eq!(Sector::from_label(label), expected);
    }

    #[rstest]
    #[case("Information Technology", "Technology")]
    #[case("consumer staples", "Consumer Defensive")]
    #[case(" Unknown ", "Unknown")]
    #[case("Conglomerates", "Conglomerates")]
    #[case("", "")]
    fn test_canonical_label(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(canonical_label(label), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Sector::FinancialServices), "Financial Services");
        assert_eq!(format!("{}", Sector::Energy), "Energy");
    }
}
