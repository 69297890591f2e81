//! cashflow-cli - weekly cash-flow forecasting for small businesses
//!
//! Reads a history of inflows and outflows, estimates an opening balance,
//! folds the history into Monday-anchored weeks, and projects the weekly
//! averages forward. Each projected week is labelled safe, tight or risky
//! against a buffer derived from the average weekly outflow.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, weeks, forecasts)
//! - `services`: The forecasting pipeline
//! - `reports`: Alerts, recommendations and the combined report
//! - `export`: JSON and YAML documents
//! - `explain`: Question answering over a finished report
//! - `display`: Terminal views of the history
//! - `cli`: Command handlers for the `cashflow` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use cashflow::services::{forecast, load_csv, normalize, ForecastOptions};
//!
//! let records = load_csv(Path::new("transactions.csv"))?;
//! let transactions = normalize(&records)?;
//! let result = forecast(&transactions, &ForecastOptions::new().with_horizon(8))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod explain;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{CashflowError, CashflowResult};
