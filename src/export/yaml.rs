//! YAML Export functionality
//!
//! Exports a forecast report to YAML for human-readable sharing.

use crate::error::{CashflowError, CashflowResult};
use crate::export::json::ForecastExport;
use crate::reports::ForecastReport;
use std::io::Write;

/// Export a forecast report to YAML format
pub fn export_forecast_yaml<W: Write>(
    report: &ForecastReport,
    symbol: &str,
    writer: &mut W,
) -> CashflowResult<()> {
    let export = ForecastExport::from_report(report, symbol);

    writeln!(writer, "# cashflow-cli forecast export")
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts under 'report' are in cents.")
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| CashflowError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CashflowError::Export(e.to_string()))?;

    Ok(())
}
