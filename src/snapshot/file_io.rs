//! Snapshot file readers
//!
//! JSON and YAML files hold a whole snapshot; CSV files hold transactions
//! only (one row per record, headers `type,amount,category,description,date`
//! with an optional leading `id`).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use super::Snapshot;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{category, Transaction};

/// On-disk snapshot encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
    Csv,
}

impl SnapshotFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> DashboardResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("csv") => Ok(Self::Csv),
            _ => Err(DashboardError::Snapshot(format!(
                "Unsupported snapshot file {} (expected .json, .yaml or .csv)",
                path.display()
            ))),
        }
    }
}

fn open(path: &Path) -> DashboardResult<BufReader<File>> {
    if !path.exists() {
        return Err(DashboardError::Snapshot(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path).map_err(|e| {
        DashboardError::Snapshot(format!("Failed to open {}: {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

/// Load and validate a snapshot file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> DashboardResult<Snapshot> {
    let path = path.as_ref();
    let format = SnapshotFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "loading snapshot");

    let reader = open(path)?;
    let snapshot = match format {
        SnapshotFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            DashboardError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
        })?,
        SnapshotFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            DashboardError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
        })?,
        SnapshotFormat::Csv => Snapshot::new(read_transactions_csv(reader)?, Vec::new()),
    };

    snapshot.validate()?;
    let custom = snapshot
        .transactions
        .iter()
        .filter(|t| !category::is_recommended(&t.category))
        .count();
    if custom > 0 {
        debug!(custom, "transactions outside the recommended categories");
    }
    info!(
        transactions = snapshot.transactions.len(),
        budgets = snapshot.budgets.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// Load transactions from a CSV file
pub fn load_transactions_csv<P: AsRef<Path>>(path: P) -> DashboardResult<Vec<Transaction>> {
    let path = path.as_ref();
    let transactions = read_transactions_csv(open(path)?)?;
    for txn in &transactions {
        txn.validate()
            .map_err(|e| DashboardError::Validation(format!("transaction {}: {}", txn.id, e)))?;
    }
    Ok(transactions)
}

/// Parse transactions from any CSV source
pub fn read_transactions_csv<R: Read>(reader: R) -> DashboardResult<Vec<Transaction>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<Transaction>()
        .enumerate()
        .map(|(row, record)| {
            record.map_err(|e| DashboardError::Csv(format!("row {}: {}", row + 1, e)))
        })
        .collect()
}
