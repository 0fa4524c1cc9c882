use analytics::{AggregationEngine, describe};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use configuration::{DashboardConfig, DatasetOverrides, load_config};
use core_types::{Dataset, FilterCriteria};
use generator::{DatasetHandle, GeneratorSettings};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod render;

/// The main entry point for the sales dashboard.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = load_config().context("Failed to load dashboard configuration")?;
    config.apply_overrides(&cli.overrides);

    // Generate the dataset once; every command reads it through the handle.
    let handle = DatasetHandle::initialize(
        config.dataset.seed,
        &GeneratorSettings::from(&config.dataset),
    )
    .context("Failed to generate the sales dataset")?;

    // Execute the appropriate command
    match cli.command {
        Commands::Summary(args) => handle_summary(&handle, args),
        Commands::Preview(args) => handle_preview(&handle, &config, args),
        Commands::Describe(args) => handle_describe(&handle, args),
        Commands::Series(args) => handle_series(&handle, args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Filter and summarise a synthetic year of daily sales.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: DatasetOverrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the metric cards and the category and region breakdowns.
    Summary(SummaryArgs),
    /// Show the first records of the filtered selection.
    Preview(PreviewArgs),
    /// Show descriptive statistics of the filtered sales.
    Describe(DescribeArgs),
    /// Show the daily and cumulative sales series behind the line charts.
    Series(SeriesArgs),
}

/// The dashboard's filter controls. Anything omitted selects everything.
#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// First day to include (format: YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day to include (format: YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Category to include (repeatable, e.g. "A").
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Region to include (repeatable, e.g. "East" or "東京").
    #[arg(long = "region")]
    regions: Vec<String>,

    /// Print JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct SummaryArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(Parser)]
struct PreviewArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Number of records to show (defaults to `display.preview_limit`).
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser)]
struct DescribeArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(Parser)]
struct SeriesArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

// ==============================================================================
// Query
// ==============================================================================

/// Turns the filter controls into criteria and applies them.
///
/// Unset controls default to the dashboard's initial state: the dataset's full
/// span and every category and region it contains.
fn run_query(dataset: &Dataset, args: &FilterArgs) -> (Dataset, FilterCriteria) {
    let defaults = FilterCriteria::select_all(dataset);

    let categories = if args.categories.is_empty() {
        defaults.categories.iter().map(|c| c.to_string()).collect()
    } else {
        args.categories.clone()
    };
    let regions = if args.regions.is_empty() {
        defaults.regions.iter().map(|r| r.to_string()).collect()
    } else {
        args.regions.clone()
    };

    filter::filter_dataset(
        dataset,
        args.from.unwrap_or(defaults.start_date),
        args.to.unwrap_or(defaults.end_date),
        categories,
        regions,
    )
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_summary(handle: &DatasetHandle, args: SummaryArgs) -> Result<()> {
    let (filtered, criteria) = run_query(handle.dataset(), &args.filter);
    let result = AggregationEngine::new().aggregate(&filtered, handle.dataset(), &criteria);

    if args.filter.json {
        let body = serde_json::json!({ "criteria": criteria, "summary": result });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", render::criteria_line(&criteria));
    println!("{}", render::metrics_table(&result));
    println!(
        "{}",
        render::breakdown_table("Category", &result.category_breakdown, result.total_sales)
    );
    println!(
        "{}",
        render::breakdown_table("Region", &result.region_breakdown, result.total_sales)
    );
    Ok(())
}

fn handle_preview(
    handle: &DatasetHandle,
    config: &DashboardConfig,
    args: PreviewArgs,
) -> Result<()> {
    let (filtered, criteria) = run_query(handle.dataset(), &args.filter);
    let limit = args.limit.unwrap_or(config.display.preview_limit);
    let rows = filtered.head(limit);

    if args.filter.json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }

    println!("{}", render::criteria_line(&criteria));
    println!("{}", render::preview_table(rows));
    println!("Showing {} of {} records.", rows.len(), filtered.len());
    Ok(())
}

fn handle_describe(handle: &DatasetHandle, args: DescribeArgs) -> Result<()> {
    let (filtered, criteria) = run_query(handle.dataset(), &args.filter);
    let stats = describe(&filtered);

    if args.filter.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", render::criteria_line(&criteria));
    println!("{}", render::stats_table(&stats));
    Ok(())
}

fn handle_series(handle: &DatasetHandle, args: SeriesArgs) -> Result<()> {
    let (filtered, criteria) = run_query(handle.dataset(), &args.filter);

    if args.filter.json {
        println!("{}", serde_json::to_string_pretty(&series_body(&filtered, &criteria))?);
        return Ok(());
    }

    println!("{}", render::criteria_line(&criteria));
    println!(
        "{}",
        render::series_table(&filtered.sales_series(), &filtered.cumulative_series())
    );
    Ok(())
}

/// Both chart series of a selection. Cumulative values are the stored
/// full-dataset running totals, so gaps left by the filter show as jumps.
fn series_body(filtered: &Dataset, criteria: &FilterCriteria) -> serde_json::Value {
    serde_json::json!({
        "criteria": criteria,
        "sales": filtered.sales_series(),
        "cumulative_sales": filtered.cumulative_series(),
    })
}
