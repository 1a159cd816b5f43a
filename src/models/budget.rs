//! Budget model
//!
//! A per-category spending ceiling for one month. How much of it has been
//! spent is never stored; it is derived from transactions by
//! [`crate::reports::budget_status`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::{self, Money};
use super::period::MonthKey;

/// A spending ceiling for one category in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub id: BudgetId,

    /// Category label matched against transaction categories
    pub category: String,

    /// Ceiling for the period
    #[serde(with = "money::as_major")]
    pub allocated: Money,

    /// The month whose transactions count against this budget
    #[serde(alias = "month_year")]
    pub period: MonthKey,
}

impl Budget {
    /// Create a new budget with a fresh ID
    pub fn new(category: impl Into<String>, allocated: Money, period: MonthKey) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            allocated,
            period,
        }
    }

    /// Validate boundary invariants
    ///
    /// Zero allocations pass here so the engine can report them as
    /// [`crate::DashboardError::InvalidBudget`]; only negatives are rejected.
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.allocated.is_negative() {
            return Err(BudgetValidationError::NegativeAllocation(self.allocated));
        }
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.period, self.category, self.allocated)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeAllocation(Money),
    MissingCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAllocation(amount) => {
                write!(f, "Budget allocation cannot be negative: {}", amount)
            }
            Self::MissingCategory => write!(f, "Budget category is required"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
