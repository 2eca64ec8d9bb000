//! Metric Registry
//!
//! Describes every ranked metric: what it measures, which group it belongs
//! to, and which direction wins. Used for lookup by feed name and for
//! listing the catalogue.

use crate::metric::{Direction, Metric};
use std::collections::HashMap;

/// Metric groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    /// Growth metrics feeding the momentum sub-score
    Momentum,
    /// Balance-sheet metrics feeding the quality sub-score
    Quality,
    /// Profitability metrics (ranked, informational)
    Profitability,
    /// Valuation ratios (ranked, category dependent)
    Valuation,
}

/// Metric metadata
#[derive(Debug, Clone)]
pub struct MetricInfo {
    /// The metric
    pub metric: Metric,
    /// Metric group
    pub category: MetricCategory,
    /// Brief description of what the metric measures
    pub description: &'static str,
}

impl MetricInfo {
    /// Feed field name
    pub const fn name(&self) -> &'static str {
        self.metric.name()
    }

    /// Comparison direction
    pub const fn direction(&self) -> Direction {
        self.metric.direction()
    }
}

/// Get all ranked metric info
pub fn available_metrics() -> Vec<MetricInfo> {
    Metric::ALL
        .into_iter()
        .map(|metric| {
            let (category, description) = match metric {
                Metric::RevenueGrowth => (MetricCategory::Momentum, "Year-over-year revenue growth"),
                Metric::ProfitGrowth => (MetricCategory::Momentum, "Year-over-year profit growth"),
                Metric::Roa => (MetricCategory::Quality, "Return on assets"),
                Metric::DebtToEquity => (MetricCategory::Quality, "Debt to equity ratio"),
                Metric::CurrentRatio => (
                    MetricCategory::Quality,
                    "Current assets over current liabilities",
                ),
                Metric::Roe => (MetricCategory::Profitability, "Return on equity"),
                Metric::Margins => (MetricCategory::Profitability, "Profit margins"),
                Metric::PriceToBook => (
                    MetricCategory::Valuation,
                    "Price to book (relevant for banking & finance)",
                ),
                Metric::EvEbitda => (
                    MetricCategory::Valuation,
                    "Enterprise value to EBITDA (relevant outside banking & finance)",
                ),
            };
            MetricInfo {
                metric,
                category,
                description,
            }
        })
        .collect()
}

/// Get metrics by category
pub fn metrics_by_category(category: MetricCategory) -> Vec<MetricInfo> {
    available_metrics()
        .into_iter()
        .filter(|m| m.category == category)
        .collect()
}

/// Get metric info by feed name
pub fn get_metric_info(name: &str) -> Option<MetricInfo> {
    available_metrics().into_iter().find(|m| m.name() == name)
}

/// List all metric names
pub fn list_metric_names() -> Vec<&'static str> {
    Metric::ALL.iter().map(Metric::name).collect()
}

/// Count metrics by category
pub fn count_by_category() -> HashMap<MetricCategory, usize> {
    let mut counts = HashMap::new();
    for info in available_metrics() {
        *counts.entry(info.category).or_insert(0) += 1;
    }
    counts
}
