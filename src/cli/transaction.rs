//! Transaction CLI commands
//!
//! Read-only listing of the snapshot's transactions.

use clap::Args;
use tracing::debug;

use super::report::parse_period_arg;
use crate::config::Settings;
use crate::display::format_transaction_table;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Transaction, TransactionKind};
use crate::reports::recent_transactions;
use crate::snapshot::Snapshot;

/// Filters for the transaction list
#[derive(Args, Debug, Default)]
pub struct TransactionArgs {
    /// Filter by type (income or expense)
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
    /// Filter by category name
    #[arg(short = 'C', long)]
    pub category: Option<String>,
    /// Filter by month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,
    /// Number of transactions to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Transactions matching `args`, newest first
pub fn select_transactions(
    snapshot: &Snapshot,
    args: &TransactionArgs,
) -> DashboardResult<Vec<Transaction>> {
    let kind = args
        .kind
        .as_deref()
        .map(|k| k.parse::<TransactionKind>().map_err(DashboardError::Validation))
        .transpose()?;
    let month = args.month.as_deref().map(parse_period_arg).transpose()?;

    let matching: Vec<Transaction> = snapshot
        .transactions
        .iter()
        .filter(|t| kind.map_or(true, |k| t.kind == k))
        .filter(|t| {
            args.category
                .as_deref()
                .map_or(true, |c| t.category.eq_ignore_ascii_case(c))
        })
        .filter(|t| month.map_or(true, |m| m.contains(t.date)))
        .cloned()
        .collect();

    debug!(matching = matching.len(), limit = args.limit, "transactions selected");
    Ok(recent_transactions(&matching, args.limit))
}

/// Handle the transaction list command
pub fn handle_transaction_command(
    snapshot: &Snapshot,
    settings: &Settings,
    args: TransactionArgs,
) -> DashboardResult<()> {
    let transactions = select_transactions(snapshot, &args)?;
    print!(
        "{}",
        format_transaction_table(&transactions, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}
