//! Canning CLI binary.
//!
//! Ranks the companies of a snapshot feed and prints or exports the results.

mod pipeline;

use canning::factors::{MetricCategory, available_metrics, metrics_by_category};
use canning::output::{BundleSummary, ExportFormat, ReportBuilder, export_bundle};
use canning::rank::DerivedBundle;
use clap::{Parser, Subcommand, ValueEnum};
use pipeline::{compute_bundle, load_config};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "canning")]
#[command(about = "Canning: rank companies, pick sector leaders, size allocations", long_about = None)]
#[command(version)]
struct Cli {
    /// Snapshot feed (JSON array or CSV)
    #[arg(long, global = true, default_value = "data.json")]
    input: PathBuf,

    /// Engine configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked companies
    Rank {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Show only the first N companies
        #[arg(long)]
        top: Option<usize>,
    },

    /// Print the leader of each sector
    Sectors,

    /// Print the allocation across sector leaders
    Allocation,

    /// Write ranking, sector and allocation files plus a JSON report
    Export {
        /// Output directory
        #[arg(long, default_value = "out")]
        dir: PathBuf,

        /// csv, json or pretty-json
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// List the ranked metrics
    Metrics {
        /// Only show one group (momentum, quality, profitability, valuation)
        #[arg(long)]
        category: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("canning=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Rank { format, top } => {
            let bundle = compute_bundle(&cli.input, config)?;
            print_ranking(&bundle, format, top)?;
        }
        Commands::Sectors => {
            let bundle = compute_bundle(&cli.input, config)?;
            print!("{}", BundleSummary::new(&bundle).sector_table());
        }
        Commands::Allocation => {
            let bundle = compute_bundle(&cli.input, config)?;
            print!("{}", BundleSummary::new(&bundle).allocation_table());
        }
        Commands::Export { dir, format } => {
            let format = ExportFormat::from_name(&format)?;
            let bundle = compute_bundle(&cli.input, config)?;
            export(&bundle, &dir, format)?;
        }
        Commands::Metrics { category } => list_metrics(category.as_deref())?,
        Commands::Config => print!("{}", config.to_toml_string()?),
    }

    Ok(())
}

fn print_ranking(
    bundle: &DerivedBundle,
    format: OutputFormat,
    top: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = match top {
        Some(n) => BundleSummary::new(bundle).with_top(n),
        None => BundleSummary::new(bundle),
    };

    match format {
        OutputFormat::Text => print!("{}", summary.to_ascii_table()),
        OutputFormat::Markdown => print!("{}", summary.to_markdown()),
        OutputFormat::Json => {
            let builder = ReportBuilder::new().bundle(bundle);
            let report = match top {
                Some(n) => builder.top(n).build()?,
                None => builder.build()?,
            };
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}

fn export(
    bundle: &DerivedBundle,
    dir: &Path,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut written = export_bundle(bundle, dir, format)?;

    let report_path = dir.join("report.json");
    ReportBuilder::new().bundle(bundle).build()?.save(&report_path)?;
    written.push(report_path);
    info!(files = written.len(), dir = %dir.display(), "exported bundle");

    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}

fn list_metrics(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = match category {
        None => available_metrics(),
        Some(name) => {
            let category = match name.to_ascii_lowercase().as_str() {
                "momentum" => MetricCategory::Momentum,
                "quality" => MetricCategory::Quality,
                "profitability" => MetricCategory::Profitability,
                "valuation" => MetricCategory::Valuation,
                other => return Err(format!("Unknown metric category: {}", other).into()),
            };
            metrics_by_category(category)
        }
    };

    println!("\n{:<16} {:<14} {:<16} Description", "Metric", "Category", "Direction");
    println!("{}", "-".repeat(80));
    for info in metrics {
        println!(
            "{:<16} {:<14} {:<16} {}",
            info.name(),
            format!("{:?}", info.category),
            format!("{:?}", info.direction()),
            info.description
        );
    }

    Ok(())
}
