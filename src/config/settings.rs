//! User settings for cashflow-cli
//!
//! Holds forecast defaults (horizon, risk multiplier) and display preferences.
//! Command-line options override whatever is stored here.

use serde::{Deserialize, Serialize};

use super::paths::CashflowPaths;
use crate::error::CashflowError;

/// User settings for cashflow-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Number of weeks to project when none is given
    #[serde(default = "default_horizon_weeks")]
    pub default_horizon_weeks: u32,

    /// Multiplier applied to the average weekly outflow to derive the buffer
    #[serde(default = "default_risk_multiplier")]
    pub risk_multiplier: f64,

    /// Currency symbol used in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Primary date format for CSV ingestion (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Skip malformed rows instead of failing the whole import
    #[serde(default)]
    pub lenient_import: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_horizon_weeks() -> u32 {
    8
}

fn default_risk_multiplier() -> f64 {
    1.0
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_horizon_weeks: default_horizon_weeks(),
            risk_multiplier: default_risk_multiplier(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            lenient_import: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &CashflowPaths) -> Result<Self, CashflowError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CashflowError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CashflowError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CashflowPaths) -> Result<(), CashflowError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CashflowError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CashflowError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
