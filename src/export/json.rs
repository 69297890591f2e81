//! JSON Export functionality
//!
//! Exports a forecast report to JSON with schema versioning. The same
//! document can be read back to answer questions without recomputing.

use crate::error::{CashflowError, CashflowResult};
use crate::reports::ForecastReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported forecast document
///
/// Amounts inside `report` are integer cents; `alerts` and `recommendations`
/// carry the rendered texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Currency symbol used in the rendered texts
    pub currency_symbol: String,

    pub report: ForecastReport,

    pub alerts: Vec<String>,

    pub recommendations: Vec<String>,
}

impl ForecastExport {
    /// Build an export document from a report
    pub fn from_report(report: &ForecastReport, symbol: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: symbol.to_string(),
            report: report.clone(),
            alerts: report.alert_messages(symbol),
            recommendations: report.recommendation_messages(symbol),
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let forecast = &self.report.forecast;
        if forecast.buffer_amount.is_negative() {
            return Err(format!(
                "Buffer amount must not be negative, got {}",
                forecast.buffer_amount
            ));
        }

        if forecast.average_inflow.is_negative() || forecast.average_outflow.is_negative() {
            return Err(format!(
                "Weekly averages must not be negative, got inflow {} and outflow {}",
                forecast.average_inflow, forecast.average_outflow
            ));
        }

        for pair in forecast.points.windows(2) {
            if (pair[1].week_start - pair[0].week_start).num_days() != 7 {
                return Err(format!(
                    "Forecast weeks are not consecutive: {} then {}",
                    pair[0].week_start, pair[1].week_start
                ));
            }
        }

        Ok(())
    }
}

/// Export a forecast report to JSON
pub fn export_forecast_json<W: Write>(
    report: &ForecastReport,
    symbol: &str,
    writer: &mut W,
    pretty: bool,
) -> CashflowResult<()> {
    let export = ForecastExport::from_report(report, symbol);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| CashflowError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| CashflowError::Export(e.to_string()))?;

    Ok(())
}

/// Read a JSON export back
pub fn import_from_json(json_str: &str) -> CashflowResult<ForecastExport> {
    let export: ForecastExport =
        serde_json::from_str(json_str).map_err(|e| CashflowError::Import(e.to_string()))?;

    export.validate().map_err(CashflowError::Import)?;

    Ok(export)
}
