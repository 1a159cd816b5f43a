//! Demo snapshot shown when a user has no data yet

use chrono::NaiveDate;

use super::Snapshot;
use crate::models::{Budget, Money, MonthKey, Transaction, TransactionKind};

const DEMO_TRANSACTIONS: &[(TransactionKind, i64, &str, &str, (i32, u32, u32))] = &[
    (TransactionKind::Income, 520_000, "Income", "Salary Deposit", (2025, 8, 1)),
    (TransactionKind::Expense, 120_000, "Housing", "Rent Payment", (2025, 8, 5)),
    (TransactionKind::Expense, 45_000, "Food & Dining", "Groceries", (2025, 8, 10)),
    (TransactionKind::Income, 520_000, "Income", "Salary Deposit", (2025, 9, 1)),
    (TransactionKind::Expense, 120_000, "Housing", "Rent Payment", (2025, 9, 5)),
    (TransactionKind::Expense, 38_000, "Food & Dining", "Groceries", (2025, 9, 12)),
    (TransactionKind::Expense, 20_000, "Transportation", "Fuel", (2025, 9, 15)),
    (TransactionKind::Income, 570_000, "Income", "Salary Deposit", (2025, 10, 1)),
    (TransactionKind::Expense, 120_000, "Housing", "Rent Payment", (2025, 10, 5)),
    (TransactionKind::Expense, 52_000, "Food & Dining", "Groceries", (2025, 10, 8)),
    (TransactionKind::Expense, 15_000, "Entertainment", "Movie Tickets", (2025, 10, 20)),
    (TransactionKind::Income, 570_000, "Income", "Salary Deposit", (2025, 11, 1)),
    (TransactionKind::Income, 80_000, "Income", "Part-time Job", (2025, 11, 10)),
    (TransactionKind::Expense, 120_000, "Housing", "Rent Payment", (2025, 11, 5)),
    (TransactionKind::Expense, 48_000, "Food & Dining", "Groceries", (2025, 11, 15)),
    (TransactionKind::Expense, 30_000, "Utilities", "Electric Bill", (2025, 11, 18)),
    (TransactionKind::Income, 570_000, "Income", "Salary Deposit", (2025, 12, 1)),
    (TransactionKind::Expense, 120_000, "Housing", "Rent Payment", (2025, 12, 5)),
    (TransactionKind::Expense, 65_000, "Food & Dining", "Groceries", (2025, 12, 10)),
    (TransactionKind::Expense, 40_000, "Shopping", "Holiday Gifts", (2025, 12, 20)),
    (TransactionKind::Income, 570_000, "Income", "Salary Deposit", (2026, 1, 1)),
    (TransactionKind::Income, 175_000, "Income", "Freelance Web Design", (2026, 1, 15)),
    (TransactionKind::Expense, 120_000, "Housing", "Rent Payment", (2026, 1, 5)),
    (TransactionKind::Expense, 72_000, "Food & Dining", "Groceries", (2026, 1, 20)),
    (TransactionKind::Expense, 35_000, "Utilities", "Internet", (2026, 1, 25)),
];

const DEMO_BUDGETS: &[(&str, i64)] = &[
    ("Food & Dining", 1500),
    ("Housing", 1200),
    ("Transportation", 800),
    ("Utilities", 400),
    ("Entertainment", 400),
    ("Education", 1000),
];

/// Six months of sample activity ending January 2026, with January budgets
pub fn demo_snapshot() -> Snapshot {
    let transactions = DEMO_TRANSACTIONS
        .iter()
        .filter_map(|&(kind, cents, category, description, (y, m, d))| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(
                Transaction::new(kind, Money::from_cents(cents), category, date)
                    .with_description(description),
            )
        })
        .collect();

    let budgets = match MonthKey::new(2026, 1) {
        Ok(period) => DEMO_BUDGETS
            .iter()
            .map(|&(category, major)| Budget::new(category, Money::from_major(major), period))
            .collect(),
        Err(_) => Vec::new(),
    };

    Snapshot::new(transactions, budgets)
}
