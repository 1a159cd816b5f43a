//! Reports module for the budget dashboard
//!
//! The pure aggregation engine (totals, monthly buckets, category breakdown,
//! budget status) and the reports composed from it: budget overview,
//! trailing-window analytics and the landing dashboard.

pub mod analytics;
pub mod budget_overview;
pub mod budget_status;
pub mod categories;
pub mod dashboard;
pub mod monthly;
pub mod summary;

pub use analytics::AnalyticsReport;
pub use budget_overview::{BudgetOverviewReport, BudgetReportRow};
pub use budget_status::{
    budget_status, spent_against, BudgetState, BudgetStatus, EXCEEDED_THRESHOLD,
    WARNING_THRESHOLD,
};
pub use categories::{category_breakdown, CategoryTotal};
pub use dashboard::{recent_transactions, DashboardReport};
pub use monthly::{bucket_by_month, MonthlyBucket};
pub use summary::{compute_totals, Summary};
