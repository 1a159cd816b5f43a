//! Budget Dashboard - personal finance reporting over income, expenses and budgets
//!
//! This library turns an immutable snapshot of transactions and budgets into
//! the figures a finance dashboard shows: running totals, per-month buckets,
//! ranked spending categories and budget consumption with threshold alerts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (money, month keys, transactions, budgets)
//! - `snapshot`: Loading and validating input snapshots, demo data
//! - `reports`: The pure aggregation engine and the reports built on it
//! - `display`: Terminal formatting helpers
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the `dashboard` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use budget_dashboard::reports::{category_breakdown, compute_totals};
//! use budget_dashboard::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::demo();
//! let summary = compute_totals(&snapshot.transactions);
//! assert!(summary.balance.is_positive());
//!
//! let top = category_breakdown(&snapshot.transactions, 3);
//! assert_eq!(top[0].category, "Housing");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod snapshot;

pub use error::{DashboardError, DashboardResult};
