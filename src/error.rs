//! Custom error types for the budget dashboard
//!
//! This module defines the error hierarchy for the library using thiserror.
//! The aggregation engine itself has exactly one failure mode
//! ([`DashboardError::InvalidBudget`]); everything else comes from the
//! snapshot boundary, configuration or report export.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budget dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for records crossing the input boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// Snapshot loading errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// A budget with a non-positive allocation was handed to the engine
    #[error("Invalid budget for '{category}': allocated amount must be positive, got {allocated}")]
    InvalidBudget { category: String, allocated: Money },
}

impl DashboardError {
    /// Create an invalid-budget error
    pub fn invalid_budget(category: impl Into<String>, allocated: Money) -> Self {
        Self::InvalidBudget {
            category: category.into(),
            allocated,
        }
    }

    /// Check if this is an invalid-budget error
    pub fn is_invalid_budget(&self) -> bool {
        matches!(self, Self::InvalidBudget { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for DashboardError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for budget dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
