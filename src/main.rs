use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use budget_dashboard::cli::{
    handle_report_command, handle_transaction_command, ReportCommands, TransactionArgs,
};
use budget_dashboard::config::{DashboardPaths, Settings};
use budget_dashboard::snapshot::{load_snapshot, Snapshot};

#[derive(Parser)]
#[command(
    name = "dashboard",
    version,
    about = "Personal finance dashboard for income, expenses and budgets",
    long_about = "Reads a snapshot of transactions and budgets and reports totals, \
                  monthly trends, category breakdowns and budget alerts."
)]
struct Cli {
    /// Snapshot file to read (JSON, YAML or CSV); defaults to the data directory
    #[arg(short, long, global = true, env = "BUDGET_DASHBOARD_DATA")]
    data: Option<PathBuf>,

    /// Report on the built-in demo data set instead of any snapshot file
    #[arg(long, global = true, conflicts_with = "data")]
    demo: bool,

    /// Currency symbol, overriding the configured one
    #[arg(long, global = true)]
    symbol: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// List transactions
    #[command(alias = "txn")]
    Transactions(TransactionArgs),

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("budget_dashboard=warn")),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the requested snapshot, or the default one if it exists
fn load_input(cli_data: Option<PathBuf>, paths: &DashboardPaths) -> Result<Snapshot> {
    match cli_data {
        Some(path) => load_snapshot(&path)
            .with_context(|| format!("Failed to load snapshot from {}", path.display())),
        None => {
            let default = paths.snapshot_file();
            if default.exists() {
                load_snapshot(&default)
                    .with_context(|| format!("Failed to load snapshot from {}", default.display()))
            } else {
                debug!(path = %default.display(), "no snapshot file, starting empty");
                Ok(Snapshot::default())
            }
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = DashboardPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(symbol) = cli.symbol {
        settings.currency_symbol = symbol;
    }

    let command = match cli.command {
        Some(Commands::Config) => {
            println!("Budget Dashboard Configuration");
            println!("==============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Snapshot file:    {}", paths.snapshot_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Trend months:        {}", settings.trend_months);
            println!("  Top categories:      {}", settings.top_categories);
            println!("  Recent transactions: {}", settings.recent_transactions);
            println!("  Demo when empty:     {}", settings.demo_when_empty);
            println!("  Date format:         {}", settings.date_format);
            return Ok(());
        }
        Some(command) => command,
        None => Commands::Report(ReportCommands::Dashboard { recent: None }),
    };

    let snapshot = if cli.demo {
        Snapshot::demo()
    } else {
        load_input(cli.data, &paths)?.or_demo(settings.demo_when_empty)
    };
    if snapshot.is_empty() {
        warn!("snapshot is empty; reports will show zeros");
    }

    match command {
        Commands::Report(cmd) => handle_report_command(&snapshot, &settings, cmd)?,
        Commands::Transactions(args) => handle_transaction_command(&snapshot, &settings, args)?,
        Commands::Config => {}
    }

    Ok(())
}
