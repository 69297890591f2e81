//! Export module for cashflow-cli
//!
//! Writes forecast reports in machine-readable formats:
//! - JSON: versioned document that can be read back
//! - YAML: the same document, human-readable
//!
//! CSV output of the weekly points lives on [`crate::reports::ForecastReport`].

pub mod json;
pub mod yaml;

pub use json::{export_forecast_json, import_from_json, ForecastExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_forecast_yaml;
