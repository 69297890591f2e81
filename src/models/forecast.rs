//! Forecast models
//!
//! Weekly historical aggregates, per-week forecast points and the risk labels
//! attached to them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Historical totals for one Monday-anchored week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAggregate {
    pub week_start: NaiveDate,
    pub total_inflow: Money,
    pub total_outflow: Money,
}

impl WeeklyAggregate {
    /// Net movement for the week
    pub fn net(&self) -> Money {
        self.total_inflow - self.total_outflow
    }
}

/// Weekly aggregates of a transaction history and their averages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHistory {
    /// One entry per week with at least one transaction, ascending
    pub weeks: Vec<WeeklyAggregate>,
    pub average_inflow: Money,
    pub average_outflow: Money,
}

impl WeeklyHistory {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }
}

/// How close a projected balance sits to the safety buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// At least twice the buffer
    Safe,
    /// At least the buffer, below twice the buffer
    Tight,
    /// Below the buffer
    Risky,
}

impl RiskLevel {
    /// Whether an alert should be raised for this level
    pub fn needs_attention(&self) -> bool {
        !matches!(self, Self::Safe)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Safe => "safe",
            Self::Tight => "tight",
            Self::Risky => "risky",
        };
        f.pad(label)
    }
}

/// Projection for a single future week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub projected_inflow: Money,
    pub projected_outflow: Money,
    pub projected_balance: Money,
    pub risk_level: RiskLevel,
}

/// Result of one forecast run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    /// Balance the projection starts from (supplied or estimated)
    pub initial_balance: Money,
    /// Classification threshold shared by every week of the run
    pub buffer_amount: Money,
    pub average_inflow: Money,
    pub average_outflow: Money,
    /// One point per horizon week, ascending
    pub points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Weeks classified at the given level, in forecast order
    pub fn weeks_at(&self, level: RiskLevel) -> impl Iterator<Item = &ForecastPoint> {
        self.points.iter().filter(move |p| p.risk_level == level)
    }

    /// First week classified as risky, if any
    pub fn first_risky_week(&self) -> Option<&ForecastPoint> {
        self.weeks_at(RiskLevel::Risky).next()
    }

    /// Number of weeks classified as risky
    pub fn risky_week_count(&self) -> usize {
        self.weeks_at(RiskLevel::Risky).count()
    }

    /// Projected balance at the end of the horizon
    pub fn closing_balance(&self) -> Money {
        self.points
            .last()
            .map(|p| p.projected_balance)
            .unwrap_or(self.initial_balance)
    }

    /// Lowest projected balance over the horizon
    pub fn lowest_point(&self) -> Option<&ForecastPoint> {
        self.points.iter().min_by_key(|p| p.projected_balance)
    }
}
