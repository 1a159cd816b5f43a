//! Budget Overview Report
//!
//! Every budget with its consumption status, plus allocated/spent/remaining
//! totals across the set.

use serde::Serialize;
use std::io::Write;
use tracing::debug;

use super::budget_status::{budget_status, BudgetState, BudgetStatus};
use crate::display::{
    double_separator, format_bar, format_currency, format_percentage, status_label, status_marker,
};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Budget, Money, MonthKey, Transaction};

/// One budget and how much of it is used
#[derive(Debug, Clone, Serialize)]
pub struct BudgetReportRow {
    pub budget: Budget,
    pub status: BudgetStatus,
}

/// Budget Overview Report
#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverviewReport {
    /// Month the report is restricted to, if any
    pub period: Option<MonthKey>,
    pub rows: Vec<BudgetReportRow>,
    pub total_allocated: Money,
    pub total_spent: Money,
    /// `total_allocated - total_spent`
    pub remaining: Money,
}

impl BudgetOverviewReport {
    /// Compute the status of every budget, optionally only those for `period`
    ///
    /// Budgets keep their input order. A budget with a non-positive allocation
    /// fails the whole report with [`DashboardError::InvalidBudget`].
    pub fn generate(
        budgets: &[Budget],
        transactions: &[Transaction],
        period: Option<MonthKey>,
    ) -> DashboardResult<Self> {
        let mut rows = Vec::new();
        let mut total_allocated = Money::zero();
        let mut total_spent = Money::zero();

        for budget in budgets
            .iter()
            .filter(|b| period.map_or(true, |p| b.period == p))
        {
            let status = budget_status(budget, transactions)?;
            total_allocated += budget.allocated;
            total_spent += status.spent;
            rows.push(BudgetReportRow {
                budget: budget.clone(),
                status,
            });
        }

        debug!(budgets = rows.len(), "budget overview generated");

        Ok(Self {
            period,
            rows,
            total_allocated,
            total_spent,
            remaining: total_allocated - total_spent,
        })
    }

    pub fn count_in(&self, state: BudgetState) -> usize {
        self.rows.iter().filter(|r| r.status.status == state).count()
    }

    /// Rows in the warning or exceeded state
    pub fn needing_attention(&self) -> Vec<&BudgetReportRow> {
        self.rows
            .iter()
            .filter(|r| r.status.status.needs_attention())
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        match self.period {
            Some(period) => output.push_str(&format!("Budgets - {}\n", period)),
            None => output.push_str("Budgets - all periods\n"),
        }
        output.push_str(&double_separator(78));
        output.push('\n');
        output.push_str(&format!(
            "Total Budget: {}   Total Spent: {}   Remaining: {}\n\n",
            format_currency(self.total_allocated, symbol),
            format_currency(self.total_spent, symbol),
            format_currency(self.remaining, symbol)
        ));

        if self.rows.is_empty() {
            output.push_str("No budgets found.\n");
            return output;
        }

        for row in &self.rows {
            let status = &row.status;
            output.push_str(&format!(
                "{} {:<20} {:>8}  {}  {} of {}\n",
                status_marker(status.status),
                row.budget.category,
                row.budget.period.to_string(),
                status_label(status.status),
                format_currency(status.spent, symbol),
                format_currency(row.budget.allocated, symbol)
            ));
            output.push_str(&format!(
                "  {} {} used\n",
                format_bar(status.percent_used / 100.0, 30),
                format_percentage(status.percent_used)
            ));
        }

        let warnings = self.count_in(BudgetState::Warning);
        let exceeded = self.count_in(BudgetState::Exceeded);
        if warnings + exceeded > 0 {
            output.push_str(&format!(
                "\n{} over budget, {} almost there\n",
                exceeded, warnings
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> DashboardResult<()> {
        let export_err = |e: csv::Error| DashboardError::Export(e.to_string());
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record([
                "Period",
                "Category",
                "Allocated",
                "Spent",
                "Remaining",
                "Percent Used",
                "Status",
            ])
            .map_err(export_err)?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    row.budget.period.to_string(),
                    row.budget.category.clone(),
                    row.budget.allocated.to_string(),
                    row.status.spent.to_string(),
                    row.status.remaining.to_string(),
                    format!("{:.2}", row.status.percent_used),
                    row.status.status.to_string(),
                ])
                .map_err(export_err)?;
        }

        csv_writer
            .write_record([
                "TOTAL".to_string(),
                String::new(),
                self.total_allocated.to_string(),
                self.total_spent.to_string(),
                self.remaining.to_string(),
                String::new(),
                String::new(),
            ])
            .map_err(export_err)?;

        csv_writer
            .flush()
            .map_err(|e| DashboardError::Export(e.to_string()))?;
        Ok(())
    }
}
