//! Core data models for the budget dashboard
//!
//! Plain records as delivered by the data store (transactions, budgets) plus
//! the value types they are built from.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::RECOMMENDED_CATEGORIES;
pub use ids::{BudgetId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{MonthKey, PeriodParseError, MAX_TRAILING_MONTHS};
pub use transaction::{Transaction, TransactionDraft, TransactionKind, TransactionValidationError};
