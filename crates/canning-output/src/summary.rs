//! Terminal and Markdown rendering of a derived bundle.
//!
//! Missing values render as `-`. Growth is reported by the feed as a
//! fraction and shown as a percentage; scores and percentiles are already on
//! a 0-100 scale.

use canning_rank::{DerivedBundle, RankedCompany};
use std::fmt;

const RULE_WIDTH: usize = 96;

/// Format a large amount using crore (1e7) and lakh (1e5) units.
///
/// # Examples
///
/// ```
/// use canning_output::format_large_number;
///
/// assert_eq!(format_large_number(Some(3.5e9)), "350.00 Cr");
/// assert_eq!(format_large_number(Some(250_000.0)), "2.50 L");
/// assert_eq!(format_large_number(Some(900.0)), "900");
/// assert_eq!(format_large_number(None), "-");
/// ```
pub fn format_large_number(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if v.abs() >= 1e7 => format!("{:.2} Cr", v / 1e7),
        Some(v) if v.abs() >= 1e5 => format!("{:.2} L", v / 1e5),
        Some(v) => format!("{v}"),
    }
}

/// Format a growth fraction as a percentage (`0.125` -> `12.50%`).
pub fn format_growth(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}%", v * 100.0))
}

/// Format a 0-100 score or percentile with no decimals.
pub fn format_score(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.0}"))
}

/// Read-only view of a bundle for display.
#[derive(Debug, Clone, Copy)]
pub struct BundleSummary<'a> {
    bundle: &'a DerivedBundle,
    top: Option<usize>,
}

impl<'a> BundleSummary<'a> {
    /// Summarize the whole bundle.
    pub const fn new(bundle: &'a DerivedBundle) -> Self {
        Self { bundle, top: None }
    }

    /// Limit the ranking table to the first `n` companies.
    pub const fn with_top(mut self, n: usize) -> Self {
        self.top = Some(n);
        self
    }

    fn companies(&self) -> &'a [RankedCompany] {
        match self.top {
            Some(n) => self.bundle.top(n),
            None => &self.bundle.companies,
        }
    }

    /// Universe statistics block.
    pub fn overview_table(&self) -> String {
        let summary = &self.bundle.summary;
        let mut output = String::new();

        output.push_str(&format!(
            "\nUniverse Overview (as of {})\n",
            self.bundle.as_of.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!("  Companies:              {}\n", summary.company_count));
        output.push_str(&format!(
            "  Total Market Cap:       {} ({} reporting)\n",
            format_large_number(summary.total_market_cap),
            summary.market_cap_coverage
        ));
        output.push_str(&format!(
            "  Average Growth:         {} ({} reporting)\n",
            format_growth(summary.average_growth),
            summary.growth_coverage
        ));
        output.push_str(&format!(
            "  Average Display Score:  {}\n",
            summary
                .average_display_score
                .map_or_else(|| "-".to_string(), |s| format!("{s:.1}"))
        ));

        output
    }

    /// Ranked company table.
    pub fn ranking_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nRankings:\n");
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:>4}  {:<10} {:<24} {:<18} {:>7} {:>9} {:>8} {:>9}\n",
            "Rank", "Ticker", "Company", "Sector", "Score", "Momentum", "Quality", "Growth"
        ));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');

        for ranked in self.companies() {
            let company = &ranked.company;
            output.push_str(&format!(
                "{:>4}  {:<10} {:<24} {:<18} {:>7.1} {:>9} {:>8} {:>9}\n",
                ranked.rank,
                truncate(ranked.ticker(), 10),
                truncate(&company.record.name, 24),
                truncate(&company.record.sector, 18),
                company.display_score,
                format_score(company.momentum_score),
                format_score(company.quality_score),
                format_growth(company.record.revenue_growth.resolve()),
            ));
        }

        if self.bundle.is_empty() {
            output.push_str("  (no companies)\n");
        }

        output
    }

    /// Sector leader table.
    pub fn sector_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nSector Leaders:\n");
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:<10} {:<30} {:>7} {:>8}\n",
            "Sector", "Leader", "Company", "Score", "Members"
        ));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');

        for group in &self.bundle.sectors {
            output.push_str(&format!(
                "{:<24} {:<10} {:<30} {:>7.1} {:>8}\n",
                truncate(&group.sector_name, 24),
                truncate(group.leader.ticker(), 10),
                truncate(&group.leader.company.record.name, 30),
                group.leader.display_score(),
                group.member_count
            ));
        }

        output
    }

    /// Allocation table.
    pub fn allocation_table(&self) -> String {
        let mut output = String::new();

        output.push_str("\nAllocation:\n");
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!("{:<30} {:<24} {:>10}\n", "Company", "Sector", "Weight"));
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');

        for entry in &self.bundle.allocation {
            output.push_str(&format!(
                "{:<30} {:<24} {:>9.2}%\n",
                truncate(&entry.label, 30),
                truncate(&entry.sector_name, 24),
                entry.weight_percent
            ));
        }

        output
    }

    /// Format as ASCII tables for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = self.overview_table();
        output.push_str(&self.ranking_table());
        output.push_str(&self.sector_table());
        output.push_str(&self.allocation_table());
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');
        output
    }

    /// Format as Markdown for documentation.
    pub fn to_markdown(&self) -> String {
        let summary = &self.bundle.summary;
        let mut output = String::new();

        output.push_str("# Company Rankings\n\n");
        output.push_str(&format!(
            "**As of:** {}\n\n",
            self.bundle.as_of.format("%Y-%m-%d %H:%M UTC")
        ));

        output.push_str("## Overview\n\n");
        output.push_str(&format!("- **Companies:** {}\n", summary.company_count));
        output.push_str(&format!(
            "- **Total Market Cap:** {}\n",
            format_large_number(summary.total_market_cap)
        ));
        output.push_str(&format!(
            "- **Average Growth:** {}\n\n",
            format_growth(summary.average_growth)
        ));

        output.push_str("## Rankings\n\n");
        output.push_str("| Rank | Ticker | Company | Sector | Score | Momentum | Quality |\n");
        output.push_str("|------|--------|---------|--------|-------|----------|---------|\n");
        for ranked in self.companies() {
            let company = &ranked.company;
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                ranked.rank,
                ranked.ticker(),
                company.record.name,
                company.record.sector,
                company.rounded_score(),
                format_score(company.momentum_score),
                format_score(company.quality_score)
            ));
        }

        if !self.bundle.sectors.is_empty() {
            output.push_str("\n## Sector Leaders\n\n");
            output.push_str("| Sector | Leader | Score | Members |\n");
            output.push_str("|--------|--------|-------|---------|\n");
            for group in &self.bundle.sectors {
                output.push_str(&format!(
                    "| {} | {} | {:.1} | {} |\n",
                    group.sector_name,
                    group.leader.ticker(),
                    group.leader.display_score(),
                    group.member_count
                ));
            }
        }

        if !self.bundle.allocation.is_empty() {
            output.push_str("\n## Allocation\n\n");
            output.push_str("| Company | Sector | Weight |\n");
            output.push_str("|---------|--------|--------|\n");
            for entry in &self.bundle.allocation {
                output.push_str(&format!(
                    "| {} | {} | {:.2}% |\n",
                    entry.label, entry.sector_name, entry.weight_percent
                ));
            }
        }

        output
    }
}

impl fmt::Display for BundleSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.bundle.summary;
        writeln!(f, "Universe: {} companies", summary.company_count)?;
        writeln!(
            f,
            "  Total Market Cap: {}",
            format_large_number(summary.total_market_cap)
        )?;
        writeln!(f, "  Average Growth: {}", format_growth(summary.average_growth))?;
        if let Some(top) = self.bundle.companies.first() {
            writeln!(
                f,
                "  Top Ranked: {} ({:.1})",
                top.ticker(),
                top.display_score()
            )?;
        }
        writeln!(f, "  Sector Leaders: {}", self.bundle.sectors.len())?;
        Ok(())
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('~');
        out
    }
}
