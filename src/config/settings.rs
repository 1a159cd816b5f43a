//! User settings for the budget dashboard
//!
//! Display preferences and report defaults. Every field has a default so a
//! partial or older `config.json` still loads.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::DashboardPaths;
use crate::error::DashboardError;
use crate::models::MAX_TRAILING_MONTHS;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of months in the trend window
    #[serde(default = "default_trend_months")]
    pub trend_months: usize,

    /// Number of categories in spending breakdowns
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,

    /// Number of transactions on the dashboard
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,

    /// Show the demo data set when the snapshot is empty
    #[serde(default = "default_demo_when_empty")]
    pub demo_when_empty: bool,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "P".to_string()
}

fn default_trend_months() -> usize {
    6
}

fn default_top_categories() -> usize {
    5
}

fn default_recent_transactions() -> usize {
    5
}

fn default_demo_when_empty() -> bool {
    true
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            trend_months: default_trend_months(),
            top_categories: default_top_categories(),
            recent_transactions: default_recent_transactions(),
            demo_when_empty: default_demo_when_empty(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Reject values the reports cannot work with
    pub fn validate(&self) -> Result<(), DashboardError> {
        if !(1..=MAX_TRAILING_MONTHS).contains(&self.trend_months) {
            return Err(DashboardError::Config(format!(
                "trend_months must be between 1 and {}, got {}",
                MAX_TRAILING_MONTHS, self.trend_months
            )));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(DashboardError::Config(format!(
                "Invalid date_format: {}",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DashboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DashboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), DashboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            DashboardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
