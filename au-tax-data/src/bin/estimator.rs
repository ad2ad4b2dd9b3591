use std::path::PathBuf;

use anyhow::{Context, Result};
use au_tax_core::calculations::{BasInitializer, TaxReturnInitializer};
use au_tax_core::{BusinessEntity, BusinessStructure, TaxYearConfig};
use au_tax_data::loader::{load_adjustments_from_file, load_statement_from_file};
use au_tax_data::period::resolve_period;
use au_tax_data::{EstimateReport, effective_financial_year, load_tax_year_config, logging};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

/// Estimate an Australian tax return and BAS statement from a
/// profit-and-loss CSV.
///
/// The P&L CSV has columns `section,name,amount` where section is one of
/// revenue, cost_of_sales, expense or net_income. The adjustments CSV has
/// columns `amount,direction,adjustment_type,category,description`.
#[derive(Parser, Debug)]
#[command(name = "au-tax-estimator")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the profit-and-loss CSV
    #[arg(short, long)]
    pl: PathBuf,

    /// Path to a CSV of book-to-tax adjustments
    #[arg(short, long)]
    adjustments: Option<PathBuf>,

    /// Identifier of the business entity
    #[arg(short, long)]
    entity_id: String,

    /// Display name of the business entity (defaults to the id)
    #[arg(long)]
    entity_name: Option<String>,

    /// Business structure: company, trust, partnership or soleTrader
    #[arg(short, long, default_value = "soleTrader")]
    structure: String,

    /// Financial year label, e.g. 2023-24 (defaults to the year of the rate config)
    #[arg(short = 'y', long)]
    financial_year: Option<String>,

    /// First day of the BAS period (YYYY-MM-DD)
    #[arg(long, requires = "period_end", conflicts_with = "quarter")]
    period_start: Option<NaiveDate>,

    /// Last day of the BAS period (YYYY-MM-DD)
    #[arg(long, requires = "period_start")]
    period_end: Option<NaiveDate>,

    /// BAS quarter of the financial year (1 = Jul-Sep ... 4 = Apr-Jun)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=4))]
    quarter: Option<u32>,

    /// TOML file with the rates for the financial year (defaults to built-in 2023-24 rates)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter, e.g. debug or au_tax_core=trace (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.log_level.as_deref(), args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => load_tax_year_config(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => {
            debug!("using built-in tax rates");
            TaxYearConfig::default()
        }
    };

    let pl = load_statement_from_file(&args.pl)
        .with_context(|| format!("Failed to load P&L: {}", args.pl.display()))?;

    let adjustments = match &args.adjustments {
        Some(path) => load_adjustments_from_file(path)
            .with_context(|| format!("Failed to load adjustments: {}", path.display()))?,
        None => Vec::new(),
    };

    let financial_year = effective_financial_year(args.financial_year.as_deref(), &config);

    let period = resolve_period(
        financial_year,
        args.period_start,
        args.period_end,
        args.quarter,
    )
    .context("Failed to determine BAS period")?;

    let entity = BusinessEntity {
        id: args.entity_id.clone(),
        name: args
            .entity_name
            .clone()
            .unwrap_or_else(|| args.entity_id.clone()),
        business_structure: BusinessStructure::parse(&args.structure),
        abn: None,
        gst_registered: true,
    };

    if let BusinessStructure::Other(raw) = &entity.business_structure {
        info!(structure = %raw, "unrecognised business structure; using individual rates");
    }

    let tax_return = TaxReturnInitializer::new(&config).create(
        &entity.id,
        financial_year,
        &pl,
        &entity,
        &adjustments,
    );
    let bas_statement = BasInitializer::new(&config).create(&entity.id, period, &pl);
    let report = EstimateReport::new(tax_return, bas_statement);

    match args.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Toml => print!(
            "{}",
            report.to_toml().context("Failed to serialise report")?
        ),
    }

    Ok(())
}
