//! Property-based tests for the aggregation engine.

use budget_dashboard::models::{Budget, Money, MonthKey, Transaction, TransactionKind};
use budget_dashboard::reports::{
    budget_status, bucket_by_month, category_breakdown, compute_totals, BudgetState,
};
use chrono::NaiveDate;
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["Housing", "Food & Dining", "Utilities", "Transportation", "Income"];

fn amount_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000i64).prop_map(Money::from_cents)
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![Just(TransactionKind::Income), Just(TransactionKind::Expense)]
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2025i32..=2026, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        kind_strategy(),
        amount_strategy(),
        prop::sample::select(CATEGORIES),
        date_strategy(),
    )
        .prop_map(|(kind, amount, category, date)| Transaction::new(kind, amount, category, date))
}

fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction_strategy(), 0..40)
}

fn all_months() -> Vec<MonthKey> {
    MonthKey::trailing(MonthKey::new(2026, 12).unwrap(), 24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Balance is always income minus expenses, and totals match per-kind sums.
    #[test]
    fn prop_totals_conserve_amounts(txns in transactions_strategy()) {
        let summary = compute_totals(&txns);
        let income: Money = txns.iter().filter(|t| t.is_income()).map(|t| t.amount).sum();
        let expenses: Money = txns.iter().filter(|t| t.is_expense()).map(|t| t.amount).sum();

        prop_assert_eq!(summary.total_income, income);
        prop_assert_eq!(summary.total_expenses, expenses);
        prop_assert_eq!(summary.balance, summary.total_income - summary.total_expenses);
    }

    /// Totals do not depend on transaction order.
    #[test]
    fn prop_totals_order_independent(txns in transactions_strategy()) {
        let mut reversed = txns.clone();
        reversed.reverse();
        prop_assert_eq!(compute_totals(&txns), compute_totals(&reversed));
    }

    /// Buckets covering every month with data add up to the overall totals.
    #[test]
    fn prop_buckets_cover_all_transactions(txns in transactions_strategy()) {
        let keys = all_months();
        let buckets = bucket_by_month(&txns, &keys);
        let summary = compute_totals(&txns);

        prop_assert_eq!(buckets.len(), keys.len());
        let income: Money = buckets.iter().map(|b| b.income).sum();
        let expenses: Money = buckets.iter().map(|b| b.expenses).sum();
        prop_assert_eq!(income, summary.total_income);
        prop_assert_eq!(expenses, summary.total_expenses);
        for (bucket, key) in buckets.iter().zip(&keys) {
            prop_assert_eq!(bucket.month, *key);
            prop_assert_eq!(bucket.savings, bucket.income - bucket.expenses);
        }
    }

    /// Running the engine twice over the same snapshot gives identical results.
    #[test]
    fn prop_engine_is_idempotent(txns in transactions_strategy(), top_n in 0usize..8) {
        let keys = all_months();
        prop_assert_eq!(bucket_by_month(&txns, &keys), bucket_by_month(&txns, &keys));
        prop_assert_eq!(category_breakdown(&txns, top_n), category_breakdown(&txns, top_n));
    }

    /// Breakdown is sorted descending, bounded by top_n and anchored at 1.0.
    #[test]
    fn prop_breakdown_ordering(txns in transactions_strategy(), top_n in 0usize..8) {
        let breakdown = category_breakdown(&txns, top_n);

        prop_assert!(breakdown.len() <= top_n.max(1));
        for pair in breakdown.windows(2) {
            prop_assert!(pair[0].amount >= pair[1].amount);
        }
        if let Some(first) = breakdown.first() {
            prop_assert_eq!(first.share_of_max, 1.0);
        }
        for entry in &breakdown {
            prop_assert!(entry.share_of_max >= 0.0 && entry.share_of_max <= 1.0);
        }
        if txns.iter().any(|t| t.is_expense()) {
            prop_assert!(!breakdown.is_empty());
        } else {
            prop_assert!(breakdown.is_empty());
        }
    }

    /// Classification follows the unclamped percentage; the displayed one is capped.
    #[test]
    fn prop_budget_status_thresholds(
        allocated in 1i64..1_000_000i64,
        spent in 0i64..3_000_000i64,
    ) {
        let jan = MonthKey::new(2026, 1).unwrap();
        let budget = Budget::new("Housing", Money::from_cents(allocated), jan);
        let txns = vec![Transaction::expense(
            Money::from_cents(spent),
            "Housing",
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        )];

        let status = budget_status(&budget, &txns).unwrap();
        prop_assert_eq!(status.spent, Money::from_cents(spent));
        prop_assert!(status.percent_used <= 100.0);
        prop_assert_eq!(status.remaining, Money::from_cents(allocated - spent));

        let expected = if spent * 100 >= allocated * 100 {
            BudgetState::Exceeded
        } else if spent * 100 >= allocated * 75 {
            BudgetState::Warning
        } else {
            BudgetState::Good
        };
        prop_assert_eq!(status.status, expected);
    }
}
