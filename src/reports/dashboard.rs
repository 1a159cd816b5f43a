//! Dashboard Report
//!
//! The landing view: overall totals, the most recent transactions and the
//! status of every budget.

use serde::Serialize;
use std::io::Write;

use super::budget_overview::BudgetOverviewReport;
use super::summary::{compute_totals, Summary};
use crate::display::{
    double_separator, format_currency, format_percentage, format_transaction_table, status_label,
};
use crate::error::{DashboardError, DashboardResult};
use crate::models::Transaction;
use crate::snapshot::Snapshot;

/// Dashboard Report
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub summary: Summary,
    /// Newest first
    pub recent: Vec<Transaction>,
    pub budgets: BudgetOverviewReport,
}

/// The `limit` newest transactions, newest first
///
/// Transactions on the same date keep their snapshot order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.into_iter().take(limit).cloned().collect()
}

impl DashboardReport {
    pub fn generate(snapshot: &Snapshot, recent_limit: usize) -> DashboardResult<Self> {
        Ok(Self {
            summary: compute_totals(&snapshot.transactions),
            recent: recent_transactions(&snapshot.transactions, recent_limit),
            budgets: BudgetOverviewReport::generate(&snapshot.budgets, &snapshot.transactions, None)?,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&double_separator(78));
        output.push('\n');
        output.push_str(&format!(
            "Balance:  {}\nIncome:   {}\nExpenses: {}\n",
            format_currency(self.summary.balance, symbol),
            format_currency(self.summary.total_income, symbol),
            format_currency(self.summary.total_expenses, symbol)
        ));
        if let Some(rate) = self.summary.savings_rate() {
            output.push_str(&format!("Savings rate: {}\n", format_percentage(rate)));
        }

        output.push_str("\nRecent Transactions\n");
        output.push_str(&format_transaction_table(&self.recent, symbol, date_format));

        output.push_str("\nBudget Status\n");
        if self.budgets.rows.is_empty() {
            output.push_str("No budgets found.\n");
        }
        for row in &self.budgets.rows {
            output.push_str(&format!(
                "  {:<20} {:>6}  {}\n",
                row.budget.category,
                format_percentage(row.status.percent_used),
                status_label(row.status.status)
            ));
        }

        output
    }

    /// Export the summary figures to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> DashboardResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let rows = [
            ("Total Income", self.summary.total_income),
            ("Total Expenses", self.summary.total_expenses),
            ("Balance", self.summary.balance),
            ("Total Budget", self.budgets.total_allocated),
            ("Total Spent Against Budgets", self.budgets.total_spent),
        ];

        csv_writer
            .write_record(["Metric", "Amount"])
            .map_err(|e| DashboardError::Export(e.to_string()))?;
        for (label, amount) in rows {
            csv_writer
                .write_record([label.to_string(), amount.to_string()])
                .map_err(|e| DashboardError::Export(e.to_string()))?;
        }
        csv_writer
            .flush()
            .map_err(|e| DashboardError::Export(e.to_string()))?;
        Ok(())
    }
}
