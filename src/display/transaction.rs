//! Transaction list formatting

use std::fmt::Write;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::{format_currency, truncate};
use crate::models::{Transaction, TransactionKind};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, symbol: &str, date_format: &str) -> Self {
        let amount = format_currency(txn.amount, symbol);
        Self {
            date: format_date(txn, date_format),
            description: truncate(&txn.description, 30),
            category: txn.category.clone(),
            amount: match txn.kind {
                TransactionKind::Income => format!("+{}", amount),
                TransactionKind::Expense => format!("-{}", amount),
            },
        }
    }
}

/// Format the date with `date_format`, falling back to ISO 8601 when the
/// format string has an invalid specifier
fn format_date(txn: &Transaction, date_format: &str) -> String {
    let mut date = String::new();
    if write!(date, "{}", txn.date.format(date_format)).is_err() {
        return txn.date.format("%Y-%m-%d").to_string();
    }
    date
}

/// Render transactions as a table, expenses signed negative
pub fn format_transaction_table<'a, I>(transactions: I, symbol: &str, date_format: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<TransactionRow> = transactions
        .into_iter()
        .map(|t| TransactionRow::new(t, symbol, date_format))
        .collect();

    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::last(), Alignment::right());
    format!("{}\n", table)
}
