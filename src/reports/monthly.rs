//! Monthly income/expense buckets

use serde::Serialize;

use super::summary::compute_totals;
use crate::models::{Money, MonthKey, Transaction};

/// Income, expenses and net savings for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    /// `income - expenses`; negative when the month overspent
    pub savings: Money,
}

impl MonthlyBucket {
    /// An all-zero bucket for `month`
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            income: Money::zero(),
            expenses: Money::zero(),
            savings: Money::zero(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expenses.is_zero()
    }
}

/// Roll transactions up into one bucket per month key
///
/// The output has exactly one bucket per key, in the order the keys were
/// given. Keys are not sorted or de-duplicated. Months without transactions
/// produce zero buckets.
pub fn bucket_by_month(transactions: &[Transaction], month_keys: &[MonthKey]) -> Vec<MonthlyBucket> {
    month_keys
        .iter()
        .map(|&month| {
            let totals = compute_totals(transactions.iter().filter(|t| month.contains(t.date)));
            MonthlyBucket {
                month,
                income: totals.total_income,
                expenses: totals.total_expenses,
                savings: totals.balance,
            }
        })
        .collect()
}
