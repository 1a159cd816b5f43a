//! Input boundary: immutable snapshots of the data store
//!
//! A [`Snapshot`] is everything the engine reads: the user's transactions and
//! budgets at one point in time. Snapshots are loaded from files exported by
//! the data store and validated here, so the engine can assume well-formed
//! records.

pub mod file_io;
pub mod fixtures;

pub use file_io::{load_snapshot, load_transactions_csv, SnapshotFormat};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Budget, MonthKey, Transaction};

/// Transactions and budgets captured at one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    /// The built-in demo data set
    pub fn demo() -> Self {
        fixtures::demo_snapshot()
    }

    /// No transactions and no budgets
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty()
    }

    /// Substitute the demo snapshot when this one is empty
    ///
    /// This is a caller decision; nothing in the engine calls it.
    pub fn or_demo(self, use_demo: bool) -> Self {
        if use_demo && self.is_empty() {
            debug!("snapshot is empty, substituting demo data");
            Self::demo()
        } else {
            self
        }
    }

    /// Reject records that break boundary invariants
    pub fn validate(&self) -> DashboardResult<()> {
        for txn in &self.transactions {
            txn.validate().map_err(|e| {
                DashboardError::Validation(format!("transaction {}: {}", txn.id, e))
            })?;
        }
        for budget in &self.budgets {
            budget.validate().map_err(|e| {
                DashboardError::Validation(format!("budget {}: {}", budget.id, e))
            })?;
        }
        Ok(())
    }

    /// The month of the most recent transaction, if any
    pub fn latest_month(&self) -> Option<MonthKey> {
        self.transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(MonthKey::from_date)
    }
}
