//! Display formatting for terminal output
//!
//! Currency, percentage and progress-bar helpers plus transaction tables.
//! Everything here is presentation; the engine never formats values.

pub mod report;
pub mod transaction;

pub use report::{
    double_separator, format_bar, format_currency, format_currency_whole, format_percentage,
    separator, status_label, status_marker, truncate,
};
pub use transaction::format_transaction_table;
