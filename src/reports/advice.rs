//! Cash management recommendations
//!
//! Practical advice derived from historical totals and the forecast.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Forecast, Money};
use crate::services::FlowTotals;

/// A single piece of advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Historical outflows are larger than inflows
    CutOutflows,
    /// Historical inflows cover outflows
    KeepCollecting,
    /// Get ready for the first risky week
    PrepareForRiskyWeek { week_start: NaiveDate },
    /// Standing advice on invoicing
    InvoicingDiscipline,
    /// Keep about one week of outflows in reserve
    MaintainBuffer { buffer_amount: Money },
}

impl Recommendation {
    /// Human-readable recommendation text
    pub fn message(&self, symbol: &str) -> String {
        match self {
            Self::CutOutflows => "Total outflows exceed inflows; consider reducing discretionary \
                 expenses or renegotiating payment terms with vendors."
                .to_string(),
            Self::KeepCollecting => "Inflows currently exceed outflows; maintain this by invoicing \
                 promptly and following up on overdue payments."
                .to_string(),
            Self::PrepareForRiskyWeek { week_start } => format!(
                "Prepare for the week starting {} by accelerating receivables or delaying \
                 non-critical purchases.",
                week_start
            ),
            Self::InvoicingDiscipline => "Implement strict invoicing discipline: send invoices \
                 within 24 hours and follow up before due dates to stabilize cash flow."
                .to_string(),
            Self::MaintainBuffer { buffer_amount } => format!(
                "Try to maintain at least one week of outflows (~{}) as a minimum cash buffer \
                 in your main account.",
                buffer_amount.format_with_symbol(symbol)
            ),
        }
    }
}

/// Build recommendations, most specific first
pub fn recommendations(totals: &FlowTotals, forecast: &Forecast) -> Vec<Recommendation> {
    let mut advice = Vec::with_capacity(4);

    if totals.outflow_exceeds_inflow() {
        advice.push(Recommendation::CutOutflows);
    } else {
        advice.push(Recommendation::KeepCollecting);
    }

    if let Some(point) = forecast.first_risky_week() {
        advice.push(Recommendation::PrepareForRiskyWeek {
            week_start: point.week_start,
        });
    }

    advice.push(Recommendation::InvoicingDiscipline);
    advice.push(Recommendation::MaintainBuffer {
        buffer_amount: forecast.buffer_amount,
    });

    advice
}
