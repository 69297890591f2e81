//! Display formatting for terminal output
//!
//! Plain-text views of the transaction history. Forecast tables live on
//! [`crate::reports::ForecastReport`].

pub mod history;
pub mod transaction;

pub use history::format_weekly_history;
pub use transaction::{format_skipped_rows, format_transaction_register, format_transaction_row};
