//! Integration tests for bundle export and rendering.

use canning_data::{CompanyRecord, FeedValue};
use canning_factors::{CompositeScorer, Configurable, ScoringConfig};
use canning_output::{
    BundleSummary, ExportFormat, ReportBuilder, export_bundle, ranking_frame, ranking_rows,
};
use canning_rank::{AllocationWeighter, DerivedBundle, RankingAggregator, SectorAggregator};
use chrono::Utc;
use std::fs;

fn company(ticker: &str, sector: &str, growth: f64, roa: f64, de: f64, cr: f64) -> CompanyRecord {
    CompanyRecord {
        market_cap: FeedValue::from(1000.0),
        revenue_growth: FeedValue::from(growth),
        roa: FeedValue::from(roa),
        debt_to_equity: FeedValue::from(de),
        current_ratio: FeedValue::from(cr),
        ..CompanyRecord::new(ticker, format!("{ticker} Ltd"), sector)
    }
}

fn bundle() -> DerivedBundle {
    let records = vec![
        company("ALPHA", "Tech", 0.30, 0.05, 0.8, 1.0),
        company("BETA", "Tech", 0.10, 0.10, 0.2, 2.0),
        company("GAMMA", "Energy", 0.20, 0.07, -999.0, 1.5),
        company("DELTA", "Unknown", 0.25, 0.12, 0.1, 3.0),
    ];

    let scorer = CompositeScorer::with_config(ScoringConfig::default());
    let scored = scorer.score_universe(&records);
    let aggregator = RankingAggregator::new();
    let summary = aggregator.summarize(&scored);
    let companies = aggregator.rank(scored);
    let sectors = SectorAggregator::default().leaders(&companies);
    let allocation = AllocationWeighter::default().allocate(&sectors);

    DerivedBundle {
        as_of: Utc::now(),
        companies,
        summary,
        sectors,
        allocation,
    }
}

#[test]
fn test_csv_export_workflow() {
    let bundle = bundle();
    let dir = tempfile::tempdir().unwrap();

    let written = export_bundle(&bundle, dir.path(), ExportFormat::Csv).unwrap();
    assert_eq!(written.len(), 3);

    let ranking = fs::read_to_string(dir.path().join("ranking.csv")).unwrap();
    assert_eq!(ranking.lines().count(), 5);
    assert!(ranking.contains("GAMMA"));
    assert!(ranking.contains("-999"));

    let sectors = fs::read_to_string(dir.path().join("sectors.csv")).unwrap();
    assert!(sectors.contains("Tech"));
    assert!(!sectors.contains("Unknown"));

    let allocation = fs::read_to_string(dir.path().join("allocation.csv")).unwrap();
    assert!(allocation.starts_with("label,ticker,sector_name,weight_percent"));
}

#[test]
fn test_json_export_workflow() {
    let bundle = bundle();
    let dir = tempfile::tempdir().unwrap();

    let written = export_bundle(&bundle, dir.path(), ExportFormat::PrettyJson).unwrap();
    assert_eq!(written.len(), 4);

    let whole = fs::read_to_string(dir.path().join("bundle.json")).unwrap();
    let parsed: DerivedBundle = serde_json::from_str(&whole).unwrap();
    assert_eq!(parsed.companies.len(), bundle.companies.len());
    assert_eq!(parsed.sectors.len(), bundle.sectors.len());
    assert_eq!(
        parsed.company("GAMMA").unwrap().company.record.debt_to_equity,
        FeedValue::NotApplicable
    );
}

#[test]
fn test_rendering_workflow() {
    let bundle = bundle();

    let ascii = BundleSummary::new(&bundle).to_ascii_table();
    for ticker in ["ALPHA", "BETA", "GAMMA", "DELTA"] {
        assert!(ascii.contains(ticker));
    }

    let markdown = BundleSummary::new(&bundle).with_top(2).to_markdown();
    assert!(markdown.contains("# Company Rankings"));
    assert!(markdown.contains("## Allocation"));

    let df = ranking_frame(&bundle).unwrap();
    assert_eq!(df.height(), 4);

    let rows = ranking_rows(&bundle);
    assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn test_report_workflow() {
    let bundle = bundle();
    let report = ReportBuilder::new()
        .title("Weekly screen")
        .bundle(&bundle)
        .build()
        .unwrap();

    let json = report.to_json().unwrap();
    assert!(json.contains("Weekly screen"));
    assert!(json.contains("\"allocation\""));
}
