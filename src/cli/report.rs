//! CLI commands for reports
//!
//! Every handler reads one already-loaded snapshot; nothing is written back
//! except optional CSV exports.

use clap::builder::RangedU64ValueParser;
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Settings;
use crate::display::{format_bar, format_currency, format_currency_whole, format_percentage};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{MonthKey, MAX_TRAILING_MONTHS};
use crate::reports::{
    bucket_by_month, category_breakdown, compute_totals, AnalyticsReport, BudgetOverviewReport,
    DashboardReport,
};
use crate::snapshot::Snapshot;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show total income, expenses and balance
    Summary,

    /// Show income and expenses per month
    Monthly {
        /// Last month of the window (YYYY-MM); defaults to the latest month with data
        #[arg(short, long)]
        end: Option<String>,

        /// Number of months in the window
        #[arg(short, long, value_parser = month_count_parser())]
        months: Option<usize>,
    },

    /// Show the largest expense categories
    Categories {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show budget consumption and alerts
    #[command(alias = "budget")]
    Budgets {
        /// Budget period (e.g., "2026-01"); all periods when omitted
        #[arg(short, long)]
        period: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the dashboard overview
    Dashboard {
        /// Number of recent transactions to show
        #[arg(short, long)]
        recent: Option<usize>,
    },

    /// Show the trend analysis for a trailing window
    Analytics {
        /// Last month of the window (YYYY-MM)
        #[arg(short, long)]
        end: Option<String>,

        /// Number of months in the window
        #[arg(short, long, value_parser = month_count_parser())]
        months: Option<usize>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Export monthly buckets to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Accepts 1 to `MAX_TRAILING_MONTHS` months
fn month_count_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..=MAX_TRAILING_MONTHS as u64)
}

/// Handle report commands
pub fn handle_report_command(
    snapshot: &Snapshot,
    settings: &Settings,
    cmd: ReportCommands,
) -> DashboardResult<()> {
    match cmd {
        ReportCommands::Summary => handle_summary(snapshot, settings),
        ReportCommands::Monthly { end, months } => handle_monthly(snapshot, settings, end, months),
        ReportCommands::Categories { top } => handle_categories(snapshot, settings, top),
        ReportCommands::Budgets { period, output } => {
            handle_budget_report(snapshot, settings, period, output)
        }
        ReportCommands::Dashboard { recent } => handle_dashboard(snapshot, settings, recent),
        ReportCommands::Analytics {
            end,
            months,
            top,
            output,
        } => handle_analytics(snapshot, settings, end, months, top, output),
    }
}

/// Parse a `YYYY-MM` argument into a validation error on failure
pub fn parse_period_arg(value: &str) -> DashboardResult<MonthKey> {
    MonthKey::parse(value).map_err(|e| {
        DashboardError::Validation(format!("{}. Use YYYY-MM (e.g., 2026-01)", e))
    })
}

/// The explicit end month, else the latest month with data, else today
fn resolve_end(snapshot: &Snapshot, end: Option<String>) -> DashboardResult<MonthKey> {
    match end {
        Some(value) => parse_period_arg(&value),
        None => Ok(snapshot.latest_month().unwrap_or_else(MonthKey::current)),
    }
}

fn create_export(path: &Path) -> DashboardResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        DashboardError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn handle_summary(snapshot: &Snapshot, settings: &Settings) -> DashboardResult<()> {
    let symbol = &settings.currency_symbol;
    let summary = compute_totals(&snapshot.transactions);

    println!("Total Income:   {}", format_currency(summary.total_income, symbol));
    println!("Total Expenses: {}", format_currency(summary.total_expenses, symbol));
    println!("Balance:        {}", format_currency(summary.balance, symbol));
    if let Some(rate) = summary.savings_rate() {
        println!("Savings Rate:   {}", format_percentage(rate));
    }

    Ok(())
}

fn handle_monthly(
    snapshot: &Snapshot,
    settings: &Settings,
    end: Option<String>,
    months: Option<usize>,
) -> DashboardResult<()> {
    let end = resolve_end(snapshot, end)?;
    let keys = MonthKey::trailing(end, months.unwrap_or(settings.trend_months));
    let buckets = bucket_by_month(&snapshot.transactions, &keys);
    let symbol = &settings.currency_symbol;

    println!(
        "{:<10} {:>14} {:>14} {:>14}",
        "Month", "Income", "Expenses", "Savings"
    );
    for bucket in &buckets {
        println!(
            "{:<10} {:>14} {:>14} {:>14}",
            bucket.month.to_string(),
            format_currency_whole(bucket.income, symbol),
            format_currency_whole(bucket.expenses, symbol),
            format_currency_whole(bucket.savings, symbol)
        );
    }

    Ok(())
}

fn handle_categories(
    snapshot: &Snapshot,
    settings: &Settings,
    top: Option<usize>,
) -> DashboardResult<()> {
    let breakdown = category_breakdown(
        &snapshot.transactions,
        top.unwrap_or(settings.top_categories),
    );

    if breakdown.is_empty() {
        println!("No expenses found.");
        return Ok(());
    }

    for entry in &breakdown {
        println!(
            "{:<20} {} {:>12}  ({} txns)",
            entry.category,
            format_bar(entry.share_of_max, 30),
            format_currency(entry.amount, &settings.currency_symbol),
            entry.transaction_count
        );
    }

    Ok(())
}

/// Handle budget overview report
fn handle_budget_report(
    snapshot: &Snapshot,
    settings: &Settings,
    period: Option<String>,
    output: Option<PathBuf>,
) -> DashboardResult<()> {
    let period = period.as_deref().map(parse_period_arg).transpose()?;
    let report = BudgetOverviewReport::generate(&snapshot.budgets, &snapshot.transactions, period)?;

    if let Some(path) = output {
        let mut writer = create_export(&path)?;
        report.export_csv(&mut writer)?;
        info!(path = %path.display(), rows = report.rows.len(), "budget report exported");
        println!("Budget report exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}

fn handle_dashboard(
    snapshot: &Snapshot,
    settings: &Settings,
    recent: Option<usize>,
) -> DashboardResult<()> {
    let report = DashboardReport::generate(
        snapshot,
        recent.unwrap_or(settings.recent_transactions),
    )?;
    print!(
        "{}",
        report.format_terminal(&settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

fn handle_analytics(
    snapshot: &Snapshot,
    settings: &Settings,
    end: Option<String>,
    months: Option<usize>,
    top: Option<usize>,
    output: Option<PathBuf>,
) -> DashboardResult<()> {
    let end = resolve_end(snapshot, end)?;
    let report = AnalyticsReport::generate(
        &snapshot.transactions,
        end,
        months.unwrap_or(settings.trend_months),
        top.unwrap_or(settings.top_categories),
    );

    if let Some(path) = output {
        let mut writer = create_export(&path)?;
        report.export_csv(&mut writer)?;
        info!(path = %path.display(), "analytics exported");
        println!("Analytics exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
