//! Weekly history display formatting
//!
//! Formats the Monday-anchored weekly aggregates for terminal output.

use crate::models::WeeklyHistory;

/// Format weekly aggregates as a table followed by the averages
pub fn format_weekly_history(history: &WeeklyHistory, symbol: &str) -> String {
    if history.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:>14}  {:>14}  {:>14}\n",
        "Week", "Inflow", "Outflow", "Net"
    ));
    output.push_str(&format!(
        "{:-<12}  {:->14}  {:->14}  {:->14}\n",
        "", "", "", ""
    ));

    for week in &history.weeks {
        output.push_str(&format!(
            "{:<12}  {:>14}  {:>14}  {:>14}\n",
            week.week_start.format("%Y-%m-%d").to_string(),
            week.total_inflow.format_with_symbol(symbol),
            week.total_outflow.format_with_symbol(symbol),
            week.net().format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Active weeks:    {}\n",
        history.week_count()
    ));
    output.push_str(&format!(
        "Average inflow:  {}\n",
        history.average_inflow.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Average outflow: {}\n",
        history.average_outflow.format_with_symbol(symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, WeeklyAggregate};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_history() {
        let output = format_weekly_history(&WeeklyHistory::default(), "₹");
        assert_eq!(output, "No transactions found.\n");
    }

    #[test]
    fn test_history_table() {
        let history = WeeklyHistory {
            weeks: vec![WeeklyAggregate {
                week_start: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
                total_inflow: Money::from_units(100),
                total_outflow: Money::from_units(900),
            }],
            average_inflow: Money::from_units(100),
            average_outflow: Money::from_units(900),
        };

        let output = format_weekly_history(&history, "₹");
        assert!(output.contains("2025-01-06"));
        assert!(output.contains("-₹800.00"));
        assert!(output.contains("Active weeks:    1"));
        assert!(output.contains("Average outflow: ₹900.00"));
    }
}
