//! Demonstration of the export functionality in canning-output.

use canning_data::{CompanyRecord, FeedValue};
use canning_factors::CompositeScorer;
use canning_output::{BundleSummary, ExportFormat, Exporter, ranking_frame, ranking_rows, sector_rows};
use canning_rank::{AllocationWeighter, DerivedBundle, RankingAggregator, SectorAggregator};
use chrono::Utc;

fn company(ticker: &str, sector: &str, growth: f64, roa: f64, de: f64) -> CompanyRecord {
    CompanyRecord {
        market_cap: FeedValue::from(5.0e11),
        revenue_growth: FeedValue::from(growth),
        roa: FeedValue::from(roa),
        debt_to_equity: FeedValue::from(de),
        ..CompanyRecord::new(ticker, format!("{ticker} Ltd"), sector)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Canning Export Demo ===\n");

    let records = vec![
        company("INFY", "Information Technology", 0.08, 0.18, 0.1),
        company("TCS", "Information Technology", 0.06, 0.25, 0.05),
        company("HDFCBANK", "Financial Services", 0.15, 0.02, -999.0),
        company("RELIANCE", "Energy", -0.02, 0.05, 0.4),
    ];

    let scored = CompositeScorer::default().score_universe(&records);
    let aggregator = RankingAggregator::new();
    let summary = aggregator.summarize(&scored);
    let companies = aggregator.rank(scored);
    let sectors = SectorAggregator::default().leaders(&companies);
    let allocation = AllocationWeighter::default().allocate(&sectors);
    let bundle = DerivedBundle {
        as_of: Utc::now(),
        companies,
        summary,
        sectors,
        allocation,
    };

    println!("1. Terminal Summary");
    println!("{}", BundleSummary::new(&bundle).to_ascii_table());

    println!("2. Ranking CSV\n");
    println!("{}", ranking_rows(&bundle).export_to_string(ExportFormat::Csv)?);

    println!("3. Sector Leaders JSON\n");
    println!("{}\n", sector_rows(&bundle).export_to_string(ExportFormat::PrettyJson)?);

    println!("4. Allocation JSON\n");
    println!("{}\n", bundle.allocation.export_to_string(ExportFormat::Json)?);

    println!("5. DataFrame View\n");
    println!("{}", ranking_frame(&bundle)?);

    Ok(())
}
