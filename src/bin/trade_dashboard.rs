use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fractic_server_error::ServerError;
use tracing::info;
use trade_dashboard::{
    entities::{DashboardConfig, FilterSet},
    errors::{ReportSerializationFailed, WriteError},
    ext::standard_views::descriptive_insights_views,
    util::TradeDashboardUtil,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Layout {
    /// Customs overview charts (default).
    Overview,
    /// Exploratory analysis charts.
    Insights,
}

#[derive(Parser)]
#[command(about = "Summarize a customs trade dataset into ranked top-N views.")]
struct Args {
    /// Trade records (.csv, .xlsx, .xlsm, .xls or .ods).
    source: PathBuf,

    /// RON file describing currency, required columns and views.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in view layout, used when no config file is given.
    #[arg(long, value_enum, default_value_t = Layout::Overview)]
    layout: Layout,

    /// Keep rows where COLUMN equals VALUE (repeatable).
    ///
    /// Values given for the same column are alternatives; different columns
    /// must all match. Example: `--filter 'Country of Origin=NG'`.
    #[arg(long = "filter", value_name = "COLUMN=VALUE")]
    filters: Vec<String>,

    /// Keep rows received in this year (repeatable).
    #[arg(long = "year")]
    years: Vec<i32>,

    /// Number of groups shown per view (1-50).
    #[arg(long)]
    top: Option<usize>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Write the filtered rows to this CSV file.
    #[arg(long)]
    export: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ServerError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    let util = TradeDashboardUtil::new();

    let mut config = match &args.config {
        Some(path) => util.load_config(path).await?,
        None => match args.layout {
            Layout::Overview => DashboardConfig::default(),
            Layout::Insights => DashboardConfig {
                views: descriptive_insights_views(),
                ..DashboardConfig::default()
            },
        },
    };
    if let Some(top) = args.top {
        config = config.with_top_n(top)?;
    }

    let mut filters = args
        .filters
        .iter()
        .try_fold(FilterSet::new(), |f, e| f.with_expression(e))?;
    if !args.years.is_empty() {
        filters = filters.with_years(args.years.iter().copied());
    }

    let store = util.from_file(&args.source, &config).await?;
    let (report, text) = util.run_and_print(&store, &config, filters.clone());

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| ReportSerializationFailed::with_debug(&e))?;
        println!("{json}");
    } else {
        println!("{text}");
    }

    if let Some(path) = &args.export {
        let csv = util.export_csv(&store, &filters)?;
        tokio::fs::write(path, csv)
            .await
            .map_err(|e| WriteError::with_debug(&e))?;
        info!(path = %path.display(), "wrote filtered rows");
    }

    Ok(())
}
