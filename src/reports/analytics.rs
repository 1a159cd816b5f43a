//! Analytics Report
//!
//! Trailing-window trend: monthly income/expense buckets, simple monthly
//! averages and the top spending categories inside the window.

use serde::Serialize;
use std::io::Write;
use tracing::debug;

use super::categories::{category_breakdown, CategoryTotal};
use super::monthly::{bucket_by_month, MonthlyBucket};
use super::summary::{compute_totals, Summary};
use crate::display::{
    double_separator, format_bar, format_currency, format_currency_whole, separator,
};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Money, MonthKey, Transaction};

/// Analytics Report
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    /// Window months, oldest first
    pub months: Vec<MonthKey>,
    pub buckets: Vec<MonthlyBucket>,
    /// Totals over transactions inside the window
    pub totals: Summary,
    pub average_income: Money,
    pub average_expenses: Money,
    pub top_categories: Vec<CategoryTotal>,
}

impl AnalyticsReport {
    /// Build the trend for the `months` months ending at `end`
    ///
    /// Averages divide window totals by the window length, counting empty
    /// months, and truncate toward zero.
    pub fn generate(transactions: &[Transaction], end: MonthKey, months: usize, top_n: usize) -> Self {
        let keys = MonthKey::trailing(end, months);
        let buckets = bucket_by_month(transactions, &keys);

        let in_window: Vec<&Transaction> = match (keys.first(), keys.last()) {
            (Some(first), Some(last)) => {
                let (window_start, window_end) = (first.first_day(), last.last_day());
                transactions
                    .iter()
                    .filter(|t| t.date >= window_start && t.date <= window_end)
                    .collect()
            }
            _ => Vec::new(),
        };

        let totals = compute_totals(in_window.iter().copied());
        let divisor = keys.len() as i64;
        let top_categories = category_breakdown(in_window.iter().copied(), top_n);

        debug!(
            months = keys.len(),
            transactions = in_window.len(),
            "analytics generated"
        );

        Self {
            months: keys,
            buckets,
            totals,
            average_income: totals.total_income.split_even(divisor),
            average_expenses: totals.total_expenses.split_even(divisor),
            top_categories,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        let range = match (self.months.first(), self.months.last()) {
            (Some(first), Some(last)) => format!("{} to {}", first, last),
            _ => "no months".to_string(),
        };
        output.push_str(&format!("Analytics: {}\n", range));
        output.push_str(&double_separator(78));
        output.push('\n');
        output.push_str(&format!(
            "Avg. Monthly Income: {}   Avg. Monthly Expenses: {}\n\n",
            format_currency_whole(self.average_income, symbol),
            format_currency_whole(self.average_expenses, symbol)
        ));

        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expenses", "Net Savings"
        ));
        output.push_str(&separator(78));
        output.push('\n');
        for bucket in &self.buckets {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14} {:>14}\n",
                format!("{} {}", bucket.month.short_label(), bucket.month.year()),
                format_currency_whole(bucket.income, symbol),
                format_currency_whole(bucket.expenses, symbol),
                format_currency_whole(bucket.savings, symbol)
            ));
        }

        output.push_str("\nTop Spending Categories\n");
        output.push_str(&separator(78));
        output.push('\n');
        if self.top_categories.is_empty() {
            output.push_str("No expenses in this period.\n");
        }
        for (rank, category) in self.top_categories.iter().enumerate() {
            output.push_str(&format!(
                "{}. {:<20} {} {:>12}\n",
                rank + 1,
                category.category,
                format_bar(category.share_of_max, 30),
                format_currency(category.amount, symbol)
            ));
        }

        output
    }

    /// Export the monthly buckets to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> DashboardResult<()> {
        let export_err = |e: csv::Error| DashboardError::Export(e.to_string());
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Month", "Income", "Expenses", "Savings"])
            .map_err(export_err)?;

        for bucket in &self.buckets {
            csv_writer
                .write_record([
                    bucket.month.to_string(),
                    bucket.income.to_string(),
                    bucket.expenses.to_string(),
                    bucket.savings.to_string(),
                ])
                .map_err(export_err)?;
        }

        csv_writer
            .write_record([
                "AVERAGE".to_string(),
                self.average_income.to_string(),
                self.average_expenses.to_string(),
                (self.average_income - self.average_expenses).to_string(),
            ])
            .map_err(export_err)?;

        csv_writer
            .flush()
            .map_err(|e| DashboardError::Export(e.to_string()))?;
        Ok(())
    }
}
