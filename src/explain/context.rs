//! Flattened text rendering of a forecast report

use crate::reports::ForecastReport;

/// Render the report as plain text context
///
/// Lists the opening balance, the buffer, one line per week, then alerts and
/// recommendations when there are any.
pub fn build_context(report: &ForecastReport, symbol: &str) -> String {
    let forecast = &report.forecast;
    let mut lines = vec![
        format!(
            "Initial balance: {}",
            forecast.initial_balance.format_with_symbol(symbol)
        ),
        format!(
            "Recommended buffer: {}",
            forecast.buffer_amount.format_with_symbol(symbol)
        ),
        String::new(),
        "Weekly Forecast:".to_string(),
    ];

    for (idx, point) in forecast.points.iter().enumerate() {
        lines.push(format!(
            " Week {} ({} to {}): balance {}, inflow {}, outflow {}, risk: {}",
            idx + 1,
            point.week_start,
            point.week_end,
            point.projected_balance.format_with_symbol(symbol),
            point.projected_inflow.format_with_symbol(symbol),
            point.projected_outflow.format_with_symbol(symbol),
            point.risk_level
        ));
    }

    let alerts = report.alert_messages(symbol);
    if !alerts.is_empty() {
        lines.push(String::new());
        lines.push("Alerts:".to_string());
        lines.extend(alerts.into_iter().map(|a| format!(" - {}", a)));
    }

    let recommendations = report.recommendation_messages(symbol);
    if !recommendations.is_empty() {
        lines.push(String::new());
        lines.push("Recommendations:".to_string());
        lines.extend(recommendations.into_iter().map(|r| format!(" - {}", r)));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::{forecast, ForecastOptions};
    use chrono::NaiveDate;

    #[test]
    fn test_context_lists_every_week() {
        let options = ForecastOptions::new()
            .with_horizon(2)
            .with_initial_balance(Money::from_units(1000))
            .with_today(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        let report = ForecastReport::generate(&[], forecast(&[], &options).unwrap()).unwrap();

        let context = build_context(&report, "₹");
        let lines: Vec<_> = context.lines().collect();

        assert_eq!(lines[0], "Initial balance: ₹1000.00");
        assert_eq!(lines[1], "Recommended buffer: ₹0.00");
        assert_eq!(
            lines[4],
            " Week 1 (2025-03-10 to 2025-03-16): balance ₹1000.00, inflow ₹0.00, outflow ₹0.00, risk: safe"
        );
        assert!(lines[5].starts_with(" Week 2 (2025-03-17 to 2025-03-23)"));
        assert!(!context.contains("Alerts:"));
        assert!(context.contains("Recommendations:"));
    }
}
