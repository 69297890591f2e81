//! Forecast Report
//!
//! Bundles a forecast with the historical totals, alerts and recommendations
//! derived from it, and renders the whole thing for the terminal or as CSV.

use serde::{Deserialize, Serialize};
use std::io::Write;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Forecast, ForecastPoint, Transaction};
use crate::services::{flow_totals, FlowTotals};

use super::advice::{recommendations, Recommendation};
use super::alerts::{risk_alerts, RiskAlert};

/// Forecast plus everything derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Historical inflow/outflow totals
    pub totals: FlowTotals,
    /// Number of transactions the forecast was built from
    pub transaction_count: usize,
    pub forecast: Forecast,
    pub alerts: Vec<RiskAlert>,
    pub recommendations: Vec<Recommendation>,
}

/// One table row per forecast week
#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Week")]
    week: usize,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Inflow")]
    inflow: String,
    #[tabled(rename = "Outflow")]
    outflow: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Risk")]
    risk: String,
}

impl ForecastReport {
    /// Generate a report for a forecast built from `transactions`
    pub fn generate(transactions: &[Transaction], forecast: Forecast) -> CashflowResult<Self> {
        let totals = flow_totals(transactions)?;
        let alerts = risk_alerts(&forecast);
        let recommendations = recommendations(&totals, &forecast);

        Ok(Self {
            totals,
            transaction_count: transactions.len(),
            forecast,
            alerts,
            recommendations,
        })
    }

    /// Alert texts in forecast order
    pub fn alert_messages(&self, symbol: &str) -> Vec<String> {
        self.alerts.iter().map(|a| a.message(symbol)).collect()
    }

    /// Recommendation texts in priority order
    pub fn recommendation_messages(&self, symbol: &str) -> Vec<String> {
        self.recommendations.iter().map(|r| r.message(symbol)).collect()
    }

    /// Render the weekly points as a table
    pub fn format_table(&self, symbol: &str) -> String {
        let rows = self
            .forecast
            .points
            .iter()
            .enumerate()
            .map(|(idx, point)| point_row(idx + 1, point, symbol));

        Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(3..6)).with(Alignment::right()))
            .to_string()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let forecast = &self.forecast;
        let mut output = String::new();

        match (forecast.points.first(), forecast.points.last()) {
            (Some(first), Some(last)) => output.push_str(&format!(
                "Cash-flow Forecast: {} to {}\n",
                first.week_start, last.week_end
            )),
            _ => output.push_str("Cash-flow Forecast\n"),
        }
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<22}{}\n",
            "Initial balance:",
            forecast.initial_balance.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<22}{}\n",
            "Recommended buffer:",
            forecast.buffer_amount.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<22}{} in / {} out per week\n",
            "Weekly average:",
            forecast.average_inflow.format_with_symbol(symbol),
            forecast.average_outflow.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<22}{}\n\n",
            "High-risk weeks:",
            forecast.risky_week_count()
        ));

        output.push_str(&self.format_table(symbol));
        output.push('\n');

        if !self.alerts.is_empty() {
            output.push_str("\nAlerts:\n");
            for message in self.alert_messages(symbol) {
                output.push_str(&format!("  - {}\n", message));
            }
        }

        output.push_str("\nRecommendations:\n");
        for message in self.recommendation_messages(symbol) {
            output.push_str(&format!("  - {}\n", message));
        }

        output
    }

    /// Export the weekly points to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> CashflowResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record([
                "week_start",
                "week_end",
                "projected_inflow",
                "projected_outflow",
                "projected_balance",
                "risk_level",
            ])
            .map_err(|e| CashflowError::Export(e.to_string()))?;

        for point in &self.forecast.points {
            csv_writer
                .write_record([
                    point.week_start.to_string(),
                    point.week_end.to_string(),
                    point.projected_inflow.to_string(),
                    point.projected_outflow.to_string(),
                    point.projected_balance.to_string(),
                    point.risk_level.to_string(),
                ])
                .map_err(|e| CashflowError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| CashflowError::Export(e.to_string()))?;

        Ok(())
    }
}

fn point_row(week: usize, point: &ForecastPoint, symbol: &str) -> PointRow {
    PointRow {
        week,
        start: point.week_start.to_string(),
        end: point.week_end.to_string(),
        inflow: point.projected_inflow.format_with_symbol(symbol),
        outflow: point.projected_outflow.format_with_symbol(symbol),
        balance: point.projected_balance.format_with_symbol(symbol),
        risk: point.risk_level.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlowType, Money};
    use crate::services::{forecast, ForecastOptions};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_report() -> ForecastReport {
        let txns = vec![
            Transaction::new(date(2025, 1, 6), FlowType::Inflow, Money::from_units(100)),
            Transaction::new(date(2025, 1, 8), FlowType::Outflow, Money::from_units(900)),
        ];
        let options = ForecastOptions::new()
            .with_horizon(2)
            .with_initial_balance(Money::zero())
            .with_today(date(2025, 3, 5));
        let forecast = forecast(&txns, &options).unwrap();
        ForecastReport::generate(&txns, forecast).unwrap()
    }

    #[test]
    fn test_generate_report() {
        let report = sample_report();

        assert_eq!(report.transaction_count, 2);
        assert_eq!(report.totals.inflow, Money::from_units(100));
        assert_eq!(report.totals.outflow, Money::from_units(900));
        assert_eq!(report.alerts.len(), 2);
        assert_eq!(report.recommendations[0], Recommendation::CutOutflows);
        assert_eq!(
            report.recommendations[1],
            Recommendation::PrepareForRiskyWeek {
                week_start: date(2025, 3, 10)
            }
        );
    }

    #[test]
    fn test_format_terminal() {
        let output = sample_report().format_terminal("₹");

        assert!(output.contains("Cash-flow Forecast: 2025-03-10 to 2025-03-23"));
        assert!(output.contains("Recommended buffer:   ₹900.00"));
        assert!(output.contains("High-risk weeks:      2"));
        assert!(output.contains("-₹1600.00"));
        assert!(output.contains("risky"));
        assert!(output.contains("High risk in week starting 2025-03-17"));
        assert!(output.contains("Recommendations:"));
    }

    #[test]
    fn test_export_csv() {
        let mut buffer = Vec::new();
        sample_report().export_csv(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "week_start,week_end,projected_inflow,projected_outflow,projected_balance,risk_level"
        );
        assert_eq!(lines[1], "2025-03-10,2025-03-16,100.00,900.00,-800.00,risky");
        assert_eq!(lines[2], "2025-03-17,2025-03-23,100.00,900.00,-1600.00,risky");
    }
}
