//! Expense breakdown by category
//!
//! Groups expenses by their category label and ranks the groups by total.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Money, Transaction};

/// Total expenses for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
    /// Number of expense transactions in this category
    pub transaction_count: usize,
    /// `amount / top.amount`, for proportional bars; the top entry is 1.0
    pub share_of_max: f64,
}

/// Rank expense categories by total spending and keep the first `top_n`
///
/// Ties keep the order in which categories were first seen in
/// `transactions`. A `top_n` of zero is treated as one. Without any
/// expenses the result is empty.
pub fn category_breakdown<'a, I>(transactions: I, top_n: usize) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    // Insertion-ordered grouping: `order` holds first-seen order, `index`
    // maps a label to its slot.
    let mut order: Vec<(&str, Money, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
            order.push((txn.category.as_str(), Money::zero(), 0));
            order.len() - 1
        });
        order[slot].1 += txn.amount;
        order[slot].2 += 1;
    }

    // sort_by is stable, so equal totals stay in first-seen order
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(top_n.max(1));

    let top_amount = match order.first() {
        Some((_, amount, _)) => *amount,
        None => return Vec::new(),
    };

    order
        .into_iter()
        .enumerate()
        .map(|(rank, (category, amount, transaction_count))| {
            let share_of_max = if rank == 0 {
                1.0
            } else {
                amount.ratio_to(top_amount).unwrap_or(0.0)
            };
            CategoryTotal {
                category: category.to_string(),
                amount,
                transaction_count,
                share_of_max,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(major: i64, category: &str) -> Transaction {
        Transaction::expense(Money::from_major(major), category, date(2026, 1, 10))
    }

    #[test]
    fn test_scenario_breakdown() {
        let txns = vec![
            Transaction::income(Money::from_major(5200), "Income", date(2026, 1, 1)),
            Transaction::expense(Money::from_major(1200), "Housing", date(2026, 1, 5)),
            Transaction::expense(Money::from_major(720), "Food & Dining", date(2026, 1, 20)),
        ];

        let breakdown = category_breakdown(&txns, 2);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Housing");
        assert_eq!(breakdown[0].amount, Money::from_major(1200));
        assert_eq!(breakdown[0].share_of_max, 1.0);
        assert_eq!(breakdown[1].category, "Food & Dining");
        assert_eq!(breakdown[1].amount, Money::from_major(720));
        assert_eq!(breakdown[1].share_of_max, 0.6);
    }

    #[test]
    fn test_groups_and_sorts() {
        let txns = vec![
            expense(100, "Food & Dining"),
            expense(300, "Shopping"),
            expense(250, "Food & Dining"),
            expense(50, "Utilities"),
        ];

        let breakdown = category_breakdown(&txns, 5);
        let names: Vec<_> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["Food & Dining", "Shopping", "Utilities"]);
        assert_eq!(breakdown[0].amount, Money::from_major(350));
        assert_eq!(breakdown[0].transaction_count, 2);
        assert!(breakdown.windows(2).all(|w| w[0].amount >= w[1].amount));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let txns = vec![
            expense(100, "Zeta"),
            expense(100, "Alpha"),
            expense(100, "Mid"),
        ];

        for _ in 0..5 {
            let breakdown = category_breakdown(&txns, 3);
            let names: Vec<_> = breakdown.iter().map(|c| c.category.as_str()).collect();
            assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
            assert!(breakdown.iter().all(|c| c.share_of_max == 1.0));
        }
    }

    #[test]
    fn test_truncation() {
        let txns = vec![expense(1, "A"), expense(2, "B"), expense(3, "C")];
        assert_eq!(category_breakdown(&txns, 1).len(), 1);
        assert_eq!(category_breakdown(&txns, 0).len(), 1);
        assert_eq!(category_breakdown(&txns, 10).len(), 3);
    }

    #[test]
    fn test_no_expenses() {
        let txns = vec![Transaction::income(
            Money::from_major(5200),
            "Income",
            date(2026, 1, 1),
        )];
        assert!(category_breakdown(&txns, 5).is_empty());
        let none: Vec<Transaction> = Vec::new();
        assert!(category_breakdown(&none, 5).is_empty());
    }

    #[test]
    fn test_accepts_filtered_references() {
        let txns = vec![
            expense(100, "Housing"),
            Transaction::expense(Money::from_major(900), "Housing", date(2025, 12, 5)),
            expense(40, "Utilities"),
        ];

        let january = category_breakdown(txns.iter().filter(|t| t.date >= date(2026, 1, 1)), 5);
        assert_eq!(january.len(), 2);
        assert_eq!(january[0].amount, Money::from_major(100));
        assert_eq!(january[1].share_of_max, 0.4);
    }

    #[test]
    fn test_zero_amount_top() {
        let txns = vec![expense(0, "Free"), expense(0, "Also Free")];
        let breakdown = category_breakdown(&txns, 2);
        assert_eq!(breakdown[0].share_of_max, 1.0);
        assert_eq!(breakdown[1].share_of_max, 0.0);
    }
}
