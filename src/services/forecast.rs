//! Forecast projection
//!
//! Projects the running balance forward week by week using the historical
//! weekly averages, labelling each week with a risk level. The only impure
//! input is the current date, which callers can pin through
//! [`ForecastOptions::with_today`].

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Forecast, ForecastPoint, Money, Transaction, Week, WeeklyHistory};

use super::aggregate::aggregate_weekly;
use super::balance::estimate_initial_balance;
use super::risk::RiskClassifier;

/// Default number of weeks to project
pub const DEFAULT_HORIZON_WEEKS: u32 = 8;

/// Default multiplier applied to the average weekly outflow
pub const DEFAULT_RISK_MULTIPLIER: f64 = 1.0;

/// Parameters of a forecast run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastOptions {
    /// Number of weeks to project, at least 1
    pub horizon_weeks: u32,
    /// Opening balance; estimated from history when `None`
    pub initial_balance: Option<Money>,
    /// Buffer multiplier, non-negative
    pub risk_multiplier: f64,
    /// Date the forecast is computed on; the local date when `None`
    pub today: Option<NaiveDate>,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            horizon_weeks: DEFAULT_HORIZON_WEEKS,
            initial_balance: None,
            risk_multiplier: DEFAULT_RISK_MULTIPLIER,
            today: None,
        }
    }
}

impl ForecastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizon in weeks
    pub fn with_horizon(mut self, weeks: u32) -> Self {
        self.horizon_weeks = weeks;
        self
    }

    /// Set an explicit opening balance
    pub fn with_initial_balance(mut self, balance: Money) -> Self {
        self.initial_balance = Some(balance);
        self
    }

    /// Set the risk multiplier
    pub fn with_risk_multiplier(mut self, multiplier: f64) -> Self {
        self.risk_multiplier = multiplier;
        self
    }

    /// Pin the current date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Reject parameters before any computation happens
    pub fn validate(&self) -> CashflowResult<()> {
        if self.horizon_weeks == 0 {
            return Err(CashflowError::invalid_parameter(
                "horizon_weeks",
                self.horizon_weeks,
                "must be at least 1",
            ));
        }

        if !self.risk_multiplier.is_finite() || self.risk_multiplier < 0.0 {
            return Err(CashflowError::invalid_parameter(
                "risk_multiplier",
                self.risk_multiplier,
                "must be a non-negative number",
            ));
        }

        Ok(())
    }

    fn resolve_today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Forecast weekly balances from a transaction history
///
/// Aggregates the history, derives the buffer from the average weekly
/// outflow, and projects `horizon_weeks` points starting at the first Monday
/// on or after the current date.
///
/// # Errors
///
/// Returns [`CashflowError::InvalidParameter`] for a zero horizon or a
/// negative risk multiplier, and when the buffer or a projected balance falls
/// outside the representable amount range. History totals that overflow are
/// [`CashflowError::MalformedInput`].
pub fn forecast(transactions: &[Transaction], options: &ForecastOptions) -> CashflowResult<Forecast> {
    options.validate()?;

    let history = aggregate_weekly(transactions)?;
    let initial_balance = match options.initial_balance {
        Some(balance) => balance,
        None => {
            let estimated = estimate_initial_balance(transactions)?;
            debug!(%estimated, "no opening balance supplied, estimated from history");
            estimated
        }
    };

    project(&history, initial_balance, options)
}

/// Project balances from already-aggregated history
pub fn project(
    history: &WeeklyHistory,
    initial_balance: Money,
    options: &ForecastOptions,
) -> CashflowResult<Forecast> {
    options.validate()?;

    let classifier =
        RiskClassifier::from_average_outflow(history.average_outflow, options.risk_multiplier)?;
    let first_week = Week::first_on_or_after(options.resolve_today());

    let projected_inflow = history.average_inflow;
    let projected_outflow = history.average_outflow;
    // Averages are non-negative, so the weekly net cannot overflow
    let weekly_net = projected_inflow - projected_outflow;
    let mut balance = initial_balance;

    let mut points = Vec::with_capacity(options.horizon_weeks as usize);
    for i in 0..options.horizon_weeks {
        let week = first_week.offset(i as i64);
        balance = balance.checked_add(weekly_net).ok_or_else(|| {
            CashflowError::invalid_parameter(
                "horizon_weeks",
                options.horizon_weeks,
                format!(
                    "projected balance for the week starting {} exceeds the supported range",
                    week.start_date()
                ),
            )
        })?;

        points.push(ForecastPoint {
            week_start: week.start_date(),
            week_end: week.end_date(),
            projected_inflow,
            projected_outflow,
            projected_balance: balance,
            risk_level: classifier.classify(balance),
        });
    }

    let forecast = Forecast {
        initial_balance,
        buffer_amount: classifier.buffer(),
        average_inflow: history.average_inflow,
        average_outflow: history.average_outflow,
        points,
    };

    info!(
        weeks = forecast.points.len(),
        buffer = %forecast.buffer_amount,
        risky_weeks = forecast.risky_week_count(),
        "forecast complete"
    );

    Ok(forecast)
}
