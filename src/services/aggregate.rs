//! Weekly aggregation of transaction history
//!
//! Every transaction lands in the Monday-anchored week containing its date.
//! Inflow and outflow sums are grouped per week, merged with zero-fill, and
//! averaged. The projector only uses the flat averages; there is no trend or
//! seasonality. Weekly sums are checked, so an amount that pushes a week out of
//! range is reported against its transaction.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{CashflowError, CashflowResult};
use crate::models::{FlowType, Money, Transaction, Week, WeeklyAggregate, WeeklyHistory};

/// Aggregate transactions into weekly totals and average them
///
/// # Errors
///
/// Returns [`CashflowError::MalformedInput`] for the first transaction (by
/// index) whose amount overflows its week's inflow or outflow total.
pub fn aggregate_weekly(transactions: &[Transaction]) -> CashflowResult<WeeklyHistory> {
    let mut inflow_by_week: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    let mut outflow_by_week: BTreeMap<NaiveDate, Money> = BTreeMap::new();

    for (row, txn) in transactions.iter().enumerate() {
        let week_start = Week::containing(txn.date).start_date();
        let bucket = match txn.flow_type {
            FlowType::Inflow => &mut inflow_by_week,
            FlowType::Outflow => &mut outflow_by_week,
        };
        let total = bucket.entry(week_start).or_default();
        *total = total.checked_add(txn.amount).ok_or_else(|| {
            CashflowError::malformed(
                row,
                "amount",
                txn.amount.to_string(),
                format!(
                    "weekly {} total for the week starting {} exceeds the supported range",
                    txn.flow_type, week_start
                ),
            )
        })?;
    }

    // Merge both mappings; a week missing from one side contributes zero
    let mut merged: BTreeMap<NaiveDate, WeeklyAggregate> = BTreeMap::new();
    for (week_start, total) in inflow_by_week {
        merged
            .entry(week_start)
            .or_insert_with(|| empty_week(week_start))
            .total_inflow = total;
    }
    for (week_start, total) in outflow_by_week {
        merged
            .entry(week_start)
            .or_insert_with(|| empty_week(week_start))
            .total_outflow = total;
    }

    let weeks: Vec<WeeklyAggregate> = merged.into_values().collect();
    let average_inflow = Money::mean(weeks.iter().map(|w| w.total_inflow));
    let average_outflow = Money::mean(weeks.iter().map(|w| w.total_outflow));

    debug!(
        weeks = weeks.len(),
        %average_inflow,
        %average_outflow,
        "aggregated weekly history"
    );

    Ok(WeeklyHistory {
        weeks,
        average_inflow,
        average_outflow,
    })
}

fn empty_week(week_start: NaiveDate) -> WeeklyAggregate {
    WeeklyAggregate {
        week_start,
        total_inflow: Money::zero(),
        total_outflow: Money::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(date: NaiveDate, flow_type: FlowType, units: i64) -> Transaction {
        Transaction::new(date, flow_type, Money::from_units(units))
    }

    #[test]
    fn test_groups_by_monday_week() {
        let txns = vec![
            txn(date(2025, 1, 6), FlowType::Inflow, 100),
            txn(date(2025, 1, 12), FlowType::Inflow, 50),
            txn(date(2025, 1, 8), FlowType::Outflow, 30),
            txn(date(2025, 1, 13), FlowType::Outflow, 70),
        ];

        let history = aggregate_weekly(&txns).unwrap();
        assert_eq!(history.week_count(), 2);

        assert_eq!(history.weeks[0].week_start, date(2025, 1, 6));
        assert_eq!(history.weeks[0].total_inflow, Money::from_units(150));
        assert_eq!(history.weeks[0].total_outflow, Money::from_units(30));

        // Week with only an outflow still reports a zero inflow
        assert_eq!(history.weeks[1].week_start, date(2025, 1, 13));
        assert_eq!(history.weeks[1].total_inflow, Money::zero());
        assert_eq!(history.weeks[1].total_outflow, Money::from_units(70));

        assert_eq!(history.average_inflow, Money::from_units(75));
        assert_eq!(history.average_outflow, Money::from_units(50));
    }

    #[test]
    fn test_weeks_are_sorted_regardless_of_input_order() {
        let txns = vec![
            txn(date(2025, 2, 3), FlowType::Inflow, 1),
            txn(date(2025, 1, 6), FlowType::Inflow, 1),
            txn(date(2025, 1, 20), FlowType::Outflow, 1),
        ];

        let history = aggregate_weekly(&txns).unwrap();
        let starts: Vec<_> = history.weeks.iter().map(|w| w.week_start).collect();
        assert_eq!(starts, vec![date(2025, 1, 6), date(2025, 1, 20), date(2025, 2, 3)]);
    }

    #[test]
    fn test_gap_weeks_are_not_counted() {
        // Two active weeks three weeks apart: the average divides by 2, not 4
        let txns = vec![
            txn(date(2025, 1, 6), FlowType::Outflow, 100),
            txn(date(2025, 1, 27), FlowType::Outflow, 300),
        ];

        let history = aggregate_weekly(&txns).unwrap();
        assert_eq!(history.week_count(), 2);
        assert_eq!(history.average_outflow, Money::from_units(200));
        assert_eq!(history.average_inflow, Money::zero());
    }

    #[test]
    fn test_totals_cover_week_range() {
        let txns = vec![
            txn(date(2025, 1, 6), FlowType::Inflow, 10),
            txn(date(2025, 1, 9), FlowType::Outflow, 4),
            txn(date(2025, 1, 12), FlowType::Inflow, 5),
        ];

        let history = aggregate_weekly(&txns).unwrap();
        for week in &history.weeks {
            let span = Week::containing(week.week_start);
            let inflow = txns
                .iter()
                .filter(|t| t.is_inflow() && span.contains(t.date))
                .fold(Money::zero(), |acc, t| acc + t.amount);
            assert_eq!(week.total_inflow, inflow);
        }
        assert_eq!(history.weeks[0].net(), Money::from_units(11));
    }

    #[test]
    fn test_empty_history() {
        let history = aggregate_weekly(&[]).unwrap();
        assert!(history.is_empty());
        assert_eq!(history.average_inflow, Money::zero());
        assert_eq!(history.average_outflow, Money::zero());
    }

    #[test]
    fn test_weekly_total_overflow_is_reported() {
        let huge = Money::from_units(50_000_000_000_000_000);
        let txns = vec![
            txn(date(2025, 1, 6), FlowType::Outflow, 10),
            Transaction::new(date(2025, 1, 7), FlowType::Inflow, huge),
            Transaction::new(date(2025, 1, 8), FlowType::Inflow, huge),
        ];

        let err = aggregate_weekly(&txns).unwrap_err();
        assert!(err.is_malformed_input());
        match err {
            CashflowError::MalformedInput { row, field, .. } => {
                assert_eq!(row, 2);
                assert_eq!(field, "amount");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_large_amounts_in_separate_weeks_are_fine() {
        let huge = Money::from_units(50_000_000_000_000_000);
        let txns = vec![
            Transaction::new(date(2025, 1, 6), FlowType::Inflow, huge),
            Transaction::new(date(2025, 1, 13), FlowType::Inflow, huge),
        ];

        let history = aggregate_weekly(&txns).unwrap();
        assert_eq!(history.average_inflow, huge);
    }
}
