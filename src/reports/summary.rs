//! Income/expense totals
//!
//! The base rollup every other report is built on.

use serde::Serialize;

use crate::models::{Money, Transaction, TransactionKind};

/// Totals over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Always `total_income - total_expenses`
    pub balance: Money,
}

impl Summary {
    /// Share of income left after expenses, as a percentage
    ///
    /// `None` when there is no income.
    pub fn savings_rate(&self) -> Option<f64> {
        self.balance.ratio_to(self.total_income).map(|r| r * 100.0)
    }
}

/// Sum income and expenses over `transactions`
///
/// Order-independent and exact; an empty input yields an all-zero summary.
pub fn compute_totals<'a, I>(transactions: I) -> Summary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut total_income = Money::zero();
    let mut total_expenses = Money::zero();

    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => total_income += txn.amount,
            TransactionKind::Expense => total_expenses += txn.amount,
        }
    }

    Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let txns: Vec<Transaction> = Vec::new();
        let summary = compute_totals(&txns);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.savings_rate(), None);
    }

    #[test]
    fn test_scenario_totals() {
        let txns = vec![
            Transaction::income(Money::from_major(5200), "Income", date(2026, 1, 1)),
            Transaction::expense(Money::from_major(1200), "Housing", date(2026, 1, 5)),
            Transaction::expense(Money::from_major(720), "Food & Dining", date(2026, 1, 20)),
        ];

        let summary = compute_totals(&txns);
        assert_eq!(summary.total_income, Money::from_major(5200));
        assert_eq!(summary.total_expenses, Money::from_major(1920));
        assert_eq!(summary.balance, Money::from_major(3280));
    }

    #[test]
    fn test_negative_balance() {
        let txns = vec![
            Transaction::income(Money::from_cents(1000), "Income", date(2026, 1, 1)),
            Transaction::expense(Money::from_cents(2550), "Shopping", date(2026, 1, 2)),
        ];
        let summary = compute_totals(&txns);
        assert_eq!(summary.balance, Money::from_cents(-1550));
    }

    #[test]
    fn test_cents_do_not_drift() {
        // 0.10 added ten thousand times must land on exactly 1000.00
        let txns: Vec<_> = (0..10_000)
            .map(|_| Transaction::expense(Money::from_cents(10), "Other", date(2026, 1, 1)))
            .collect();
        assert_eq!(compute_totals(&txns).total_expenses, Money::from_major(1000));
    }

    #[test]
    fn test_accepts_filtered_iterators() {
        let txns = vec![
            Transaction::income(Money::from_major(100), "Income", date(2026, 1, 1)),
            Transaction::income(Money::from_major(50), "Income", date(2026, 2, 1)),
        ];
        let summary = compute_totals(txns.iter().filter(|t| t.date.month0() == 0));
        assert_eq!(summary.total_income, Money::from_major(100));
    }

    #[test]
    fn test_savings_rate() {
        let summary = Summary {
            total_income: Money::from_major(5200),
            total_expenses: Money::from_major(1920),
            balance: Money::from_major(3280),
        };
        let rate = summary.savings_rate().unwrap();
        assert!((rate - 63.0769).abs() < 0.001);
    }
}
