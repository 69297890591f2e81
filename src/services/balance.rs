//! Balance estimation from transaction history

use serde::{Deserialize, Serialize};

use crate::error::{CashflowError, CashflowResult};
use crate::models::{FlowType, Money, Transaction};

/// Historical inflow and outflow totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTotals {
    pub inflow: Money,
    pub outflow: Money,
}

impl FlowTotals {
    /// Sum every transaction by direction
    ///
    /// Fails with `MalformedInput` on the transaction whose amount takes its
    /// direction's total out of range.
    pub fn from_transactions(transactions: &[Transaction]) -> CashflowResult<Self> {
        let mut totals = Self::default();
        for (row, txn) in transactions.iter().enumerate() {
            let total = match txn.flow_type {
                FlowType::Inflow => &mut totals.inflow,
                FlowType::Outflow => &mut totals.outflow,
            };
            *total = total.checked_add(txn.amount).ok_or_else(|| {
                CashflowError::malformed(
                    row,
                    "amount",
                    txn.amount.to_string(),
                    format!("total {} exceeds the supported range", txn.flow_type),
                )
            })?;
        }
        Ok(totals)
    }

    /// Inflow minus outflow
    pub fn net(&self) -> Money {
        // Both totals are non-negative
        self.inflow - self.outflow
    }

    pub fn outflow_exceeds_inflow(&self) -> bool {
        self.outflow > self.inflow
    }
}

/// Total inflow and outflow of a history
pub fn flow_totals(transactions: &[Transaction]) -> CashflowResult<FlowTotals> {
    FlowTotals::from_transactions(transactions)
}

/// Approximate the current cash balance as total inflow minus total outflow
///
/// Used when the caller does not supply an opening balance. Zero for an empty
/// history.
pub fn estimate_initial_balance(transactions: &[Transaction]) -> CashflowResult<Money> {
    Ok(flow_totals(transactions)?.net())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(flow_type: FlowType, units: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            flow_type,
            Money::from_units(units),
        )
    }

    #[test]
    fn test_estimate_from_history() {
        let txns = vec![
            txn(FlowType::Inflow, 500),
            txn(FlowType::Outflow, 200),
            txn(FlowType::Inflow, 50),
            txn(FlowType::Outflow, 400),
        ];

        assert_eq!(estimate_initial_balance(&txns).unwrap(), Money::from_units(-50));

        let totals = FlowTotals::from_transactions(&txns).unwrap();
        assert_eq!(totals.inflow, Money::from_units(550));
        assert_eq!(totals.outflow, Money::from_units(600));
        assert!(totals.outflow_exceeds_inflow());
    }

    #[test]
    fn test_empty_history_is_zero() {
        assert_eq!(estimate_initial_balance(&[]).unwrap(), Money::zero());
        assert!(!FlowTotals::default().outflow_exceeds_inflow());
    }

    #[test]
    fn test_total_overflow_is_malformed_input() {
        let txns = vec![
            txn(FlowType::Outflow, 1),
            txn(FlowType::Outflow, 50_000_000_000_000_000),
            txn(FlowType::Outflow, 50_000_000_000_000_000),
        ];

        let err = estimate_initial_balance(&txns).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().starts_with("Malformed input at row 2, field 'amount'"));
    }

    #[test]
    fn test_large_opposite_flows_net_out() {
        let txns = vec![
            txn(FlowType::Inflow, 50_000_000_000_000_000),
            txn(FlowType::Outflow, 50_000_000_000_000_000),
        ];

        assert_eq!(estimate_initial_balance(&txns).unwrap(), Money::zero());
    }
}
