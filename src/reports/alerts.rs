//! Risk alerts
//!
//! Scans a forecast in week order and raises one alert for every week that
//! is not safe.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Forecast, Money, RiskLevel};

/// An alert for a single tight or risky week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAlert {
    pub week_start: NaiveDate,
    pub risk_level: RiskLevel,
    pub projected_balance: Money,
    pub buffer_amount: Money,
}

impl RiskAlert {
    /// Human-readable alert text
    pub fn message(&self, symbol: &str) -> String {
        let balance = self.projected_balance.format_with_symbol(symbol);
        let buffer = self.buffer_amount.format_with_symbol(symbol);
        match self.risk_level {
            RiskLevel::Risky => format!(
                "High risk in week starting {}: projected balance {} below safe buffer {}.",
                self.week_start, balance, buffer
            ),
            RiskLevel::Tight => format!(
                "Tight cash in week starting {}: projected balance {} close to buffer {}.",
                self.week_start, balance, buffer
            ),
            RiskLevel::Safe => format!(
                "Week starting {} is safe: projected balance {}.",
                self.week_start, balance
            ),
        }
    }
}

/// Collect alerts for every risky or tight week, in forecast order
pub fn risk_alerts(forecast: &Forecast) -> Vec<RiskAlert> {
    forecast
        .points
        .iter()
        .filter(|p| p.risk_level.needs_attention())
        .map(|p| RiskAlert {
            week_start: p.week_start,
            risk_level: p.risk_level,
            projected_balance: p.projected_balance,
            buffer_amount: forecast.buffer_amount,
        })
        .collect()
}
