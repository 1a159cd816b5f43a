//! Budget consumption and threshold alerts
//!
//! Classification always uses the unclamped percentage; only the
//! `percent_used` value handed to progress bars is capped at 100.

use serde::Serialize;
use std::fmt;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Budget, Money, Transaction};

/// Percentage at which a budget starts warning
pub const WARNING_THRESHOLD: f64 = 75.0;

/// Percentage at which a budget counts as exceeded
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

/// Alert level of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetState {
    /// Below 75% used
    Good,
    /// At least 75% but under 100% used
    Warning,
    /// 100% or more used
    Exceeded,
}

impl BudgetState {
    /// Classify an unclamped usage percentage
    pub fn classify(percent: f64) -> Self {
        if percent >= EXCEEDED_THRESHOLD {
            Self::Exceeded
        } else if percent >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Good
        }
    }

    pub fn needs_attention(&self) -> bool {
        !matches!(self, Self::Good)
    }
}

impl fmt::Display for BudgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Warning => write!(f, "warning"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// How much of a budget has been consumed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    /// Expenses counted against the budget
    pub spent: Money,
    /// `spent / allocated * 100`, capped at 100
    pub percent_used: f64,
    /// `spent / allocated * 100` without the cap
    pub percent_raw: f64,
    /// `allocated - spent`; negative once exceeded
    pub remaining: Money,
    pub status: BudgetState,
}

/// Sum the expenses that count against `budget`
///
/// Matching is by exact category label and by the budget's month.
pub fn spent_against(budget: &Budget, transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .filter(|t| t.category == budget.category)
        .filter(|t| budget.period.contains(t.date))
        .map(|t| t.amount)
        .sum()
}

/// Compute spending and alert level for one budget
///
/// Fails with [`DashboardError::InvalidBudget`] when the allocation is not
/// positive.
pub fn budget_status(budget: &Budget, transactions: &[Transaction]) -> DashboardResult<BudgetStatus> {
    if !budget.allocated.is_positive() {
        return Err(DashboardError::invalid_budget(
            budget.category.clone(),
            budget.allocated,
        ));
    }

    let spent = spent_against(budget, transactions);
    let percent_raw = spent
        .ratio_to(budget.allocated)
        .map(|r| r * 100.0)
        .unwrap_or_default();

    Ok(BudgetStatus {
        spent,
        percent_used: percent_raw.min(EXCEEDED_THRESHOLD),
        percent_raw,
        remaining: budget.allocated - spent,
        status: BudgetState::classify(percent_raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthKey;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn jan() -> MonthKey {
        MonthKey::new(2026, 1).unwrap()
    }

    fn food_budget() -> Budget {
        Budget::new("Food & Dining", Money::from_major(1000), jan())
    }

    fn spend(major: i64) -> Vec<Transaction> {
        vec![Transaction::expense(
            Money::from_major(major),
            "Food & Dining",
            date(2026, 1, 15),
        )]
    }

    #[test]
    fn test_scenario_housing_exceeded() {
        let txns = vec![
            Transaction::income(Money::from_major(5200), "Income", date(2026, 1, 1)),
            Transaction::expense(Money::from_major(1200), "Housing", date(2026, 1, 5)),
            Transaction::expense(Money::from_major(720), "Food & Dining", date(2026, 1, 20)),
        ];
        let budget = Budget::new("Housing", Money::from_major(1200), jan());

        let status = budget_status(&budget, &txns).unwrap();
        assert_eq!(status.spent, Money::from_major(1200));
        assert_eq!(status.percent_used, 100.0);
        assert_eq!(status.status, BudgetState::Exceeded);
        assert_eq!(status.remaining, Money::zero());
    }

    #[test]
    fn test_warning_boundary() {
        let status = budget_status(&food_budget(), &spend(750)).unwrap();
        assert_eq!(status.percent_used, 75.0);
        assert_eq!(status.status, BudgetState::Warning);

        let status = budget_status(&food_budget(), &spend(749)).unwrap();
        assert_eq!(status.status, BudgetState::Good);
    }

    #[test]
    fn test_exceeded_boundary() {
        let status = budget_status(&food_budget(), &spend(1000)).unwrap();
        assert_eq!(status.percent_used, 100.0);
        assert_eq!(status.status, BudgetState::Exceeded);

        let status = budget_status(&food_budget(), &spend(999)).unwrap();
        assert_eq!(status.status, BudgetState::Warning);
    }

    #[test]
    fn test_overspend_is_clamped_but_classified_raw() {
        let status = budget_status(&food_budget(), &spend(1001)).unwrap();
        assert_eq!(status.percent_used, 100.0);
        assert!((status.percent_raw - 100.1).abs() < 1e-9);
        assert_eq!(status.status, BudgetState::Exceeded);
        assert_eq!(status.remaining, Money::from_major(-1));
    }

    #[test]
    fn test_zero_allocation_is_rejected() {
        let budget = Budget::new("Food & Dining", Money::zero(), jan());
        let err = budget_status(&budget, &spend(10)).unwrap_err();
        assert!(err.is_invalid_budget());

        let err = budget_status(&budget, &[]).unwrap_err();
        assert!(err.is_invalid_budget());
    }

    #[test]
    fn test_negative_allocation_is_rejected() {
        let budget = Budget::new("Food & Dining", Money::from_cents(-50_000), jan());
        let err = budget_status(&budget, &spend(10)).unwrap_err();
        assert!(err.is_invalid_budget());
        assert!(err.to_string().contains("got -500.00"));
    }

    #[test]
    fn test_only_matching_expenses_in_period_count() {
        let txns = vec![
            Transaction::expense(Money::from_major(100), "Food & Dining", date(2026, 1, 31)),
            Transaction::expense(Money::from_major(200), "Food & Dining", date(2026, 2, 1)),
            Transaction::expense(Money::from_major(300), "Food & Dining", date(2025, 1, 10)),
            Transaction::expense(Money::from_major(400), "food & dining", date(2026, 1, 10)),
            Transaction::income(Money::from_major(500), "Food & Dining", date(2026, 1, 10)),
        ];

        assert_eq!(spent_against(&food_budget(), &txns), Money::from_major(100));
    }

    #[test]
    fn test_no_spending() {
        let status = budget_status(&food_budget(), &[]).unwrap();
        assert_eq!(status.spent, Money::zero());
        assert_eq!(status.percent_used, 0.0);
        assert_eq!(status.status, BudgetState::Good);
    }

    #[test]
    fn test_classify() {
        assert_eq!(BudgetState::classify(0.0), BudgetState::Good);
        assert_eq!(BudgetState::classify(74.99), BudgetState::Good);
        assert_eq!(BudgetState::classify(75.0), BudgetState::Warning);
        assert_eq!(BudgetState::classify(100.0), BudgetState::Exceeded);
        assert_eq!(BudgetState::classify(250.0), BudgetState::Exceeded);
        assert!(BudgetState::Warning.needs_attention());
        assert!(!BudgetState::Good.needs_attention());
    }
}
