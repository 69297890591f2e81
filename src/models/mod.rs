//! Core data models for cashflow-cli
//!
//! This module contains the data structures of the forecasting domain:
//! money amounts, transactions, weeks, weekly aggregates and forecast points.

pub mod forecast;
pub mod money;
pub mod period;
pub mod transaction;

pub use forecast::{Forecast, ForecastPoint, RiskLevel, WeeklyAggregate, WeeklyHistory};
pub use money::{Money, MoneyParseError};
pub use period::{Week, ANCHOR_WEEKDAY};
pub use transaction::{FlowType, RawTransaction, Transaction};
