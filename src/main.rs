//! Walletledger main entry point

mod render;

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use walletledger_config::{Config, ConfigError, ConfigErrorSeverity};
use walletledger_core::{CoreError, Dashboard, SortColumn, TypeFilter};

#[derive(Parser, Debug)]
#[command(name = "walletledger")]
#[command(version = "0.1.0")]
#[command(about = "Browse wallet transactions with search, filters, sorting and pagination", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Search remark, type, amount and currency
    #[arg(short = 'q', long)]
    search: Option<String>,

    /// Transaction type filter: all, credit or debit
    #[arg(short = 't', long = "type", default_value = "all")]
    type_filter: TypeFilter,

    /// Click a column header; repeat to toggle direction
    #[arg(short, long = "sort")]
    sort: Vec<SortColumn>,

    /// Page to show, clamped to the available pages
    #[arg(short, long, allow_negative_numbers = true)]
    page: Option<i64>,

    /// Rows per page
    #[arg(short = 'n', long)]
    page_size: Option<usize>,

    /// JSON file with transactions, instead of the built-in data
    #[arg(long)]
    data: Option<PathBuf>,

    /// Print the view as JSON
    #[arg(long)]
    json: bool,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

/// Load the config file. A warning-level failure (missing file) falls back to
/// defaults and is handed back so it can be logged once logging is up.
fn load_config(path: &Path) -> anyhow::Result<(Config, Option<ConfigError>)> {
    match Config::load(path) {
        Ok(config) => Ok((config, None)),
        Err(e) if e.severity() == ConfigErrorSeverity::Warning => Ok((Config::default(), Some(e))),
        Err(e) => Err(e).with_context(|| format!("Failed to load configuration from {}", path.display())),
    }
}

/// Error report for stderr, with hints when the cause is one of ours
fn describe_error(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<CoreError>() {
        format!("error: {}
{}", err, e.to_details())
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        format!("{}: {}
{}", e.severity(), err, e.to_details())
    } else {
        format!("error: {:#}", err)
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (mut config, fallback) = load_config(&args.config)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str()))
        .init();

    match fallback {
        None => log::info!("Config loaded from {}", args.config.display()),
        Some(e) => log::warn!("{}; using defaults", e.to_details()),
    }

    if let Some(data) = args.data {
        config.data.path = Some(data);
    }
    config.validate().context("Invalid configuration")?;

    let mut dashboard = Dashboard::from_config(&config).context("Failed to load transactions")?;
    log::info!("Dashboard ready with {} transactions", dashboard.store().len());

    if let Some(search) = args.search {
        dashboard.set_search(search);
    }
    dashboard.set_type_filter(args.type_filter);
    for column in args.sort {
        dashboard.sort_by(column);
    }
    if let Some(size) = args.page_size {
        dashboard.set_page_size(size);
    }
    if let Some(page) = args.page {
        dashboard.go_to_page(page);
    }

    let view = dashboard.view();
    if args.json {
        let json = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        println!("{}", json);
    } else {
        print!("{}", render::render_view(&view, &config.data.currency));
    }

    Ok(())
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("{}", describe_error(&err));
        std::process::exit(1);
    }
}
