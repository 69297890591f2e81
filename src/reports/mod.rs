//! Reports module for cashflow-cli
//!
//! Consumers of a finished forecast: risk alerts, recommendations and the
//! combined forecast report.

pub mod advice;
pub mod alerts;
pub mod forecast_report;

pub use advice::{recommendations, Recommendation};
pub use alerts::{risk_alerts, RiskAlert};
pub use forecast_report::ForecastReport;
