//! Walk through the ranked metric catalogue.
//!
//! Run with: cargo run --example metric_registry_demo -p canning-factors

use canning_factors::{
    Direction, MetricCategory, MetricInfo, get_metric_info, metrics_by_category,
    registry::{count_by_category, list_metric_names},
};

fn main() {
    println!("Canning Metric Registry");
    println!("=======================\n");

    let counts = count_by_category();
    for category in [
        MetricCategory::Momentum,
        MetricCategory::Quality,
        MetricCategory::Profitability,
        MetricCategory::Valuation,
    ] {
        println!(
            "{:?} ({} metrics)",
            category,
            counts.get(&category).copied().unwrap_or(0)
        );
        for info in metrics_by_category(category) {
            print_metric(&info);
        }
        println!();
    }

    println!("Lookup:");
    for name in ["debt_to_equity", "pb", "beta"] {
        match get_metric_info(name) {
            Some(info) => print_metric(&info),
            None => println!("  {:<16} not a ranked metric", name),
        }
    }

    println!("\nFeed fields: {}", list_metric_names().join(", "));
}

fn print_metric(info: &MetricInfo) {
    let arrow = match info.direction() {
        Direction::HigherIsBetter => "higher wins",
        Direction::LowerIsBetter => "lower wins",
    };
    println!("  {:<16} {:<12} {}", info.name(), arrow, info.description);
}
