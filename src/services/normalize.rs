//! Transaction normalization
//!
//! Turns raw string records into typed [`Transaction`]s. Dates are tried
//! against the configured format and then a list of common alternatives,
//! amounts must be non-negative decimals, and the type must be exactly
//! `inflow` or `outflow` (case-insensitive).

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::{CashflowError, CashflowResult};
use crate::models::{FlowType, Money, RawTransaction, Transaction};

/// Fallback date formats tried after the primary one
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%m-%d-%Y",
    "%d-%m-%Y",
];

/// Timestamp formats whose date part is kept
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// How the normalizer treats records that fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    /// The first bad record fails the whole batch
    #[default]
    Strict,
    /// Bad records are skipped and reported
    Lenient,
}

/// Output of a normalization pass
#[derive(Debug, Default)]
pub struct Normalized {
    /// Accepted transactions, in input order
    pub transactions: Vec<Transaction>,
    /// Errors for records skipped in lenient mode
    pub skipped: Vec<CashflowError>,
}

/// Validates and types raw transaction records
#[derive(Debug, Clone)]
pub struct Normalizer {
    date_format: String,
    mode: NormalizeMode,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            mode: NormalizeMode::Strict,
        }
    }
}

impl Normalizer {
    /// Create a strict normalizer using ISO dates as the primary format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set the normalization mode
    pub fn with_mode(mut self, mode: NormalizeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Normalize a batch of records
    ///
    /// In strict mode the first malformed record is returned as the error and
    /// nothing else is produced.
    pub fn normalize(&self, records: &[RawTransaction]) -> CashflowResult<Normalized> {
        let mut normalized = Normalized {
            transactions: Vec::with_capacity(records.len()),
            skipped: Vec::new(),
        };

        for (row, record) in records.iter().enumerate() {
            match self.normalize_record(row, record) {
                Ok(txn) => normalized.transactions.push(txn),
                Err(err) if self.mode == NormalizeMode::Lenient => {
                    warn!(row, error = %err, "skipping malformed record");
                    normalized.skipped.push(err);
                }
                Err(err) => return Err(err),
            }
        }

        debug!(
            accepted = normalized.transactions.len(),
            skipped = normalized.skipped.len(),
            "normalized transaction records"
        );

        Ok(normalized)
    }

    /// Normalize a single record at index `row`
    pub fn normalize_record(
        &self,
        row: usize,
        record: &RawTransaction,
    ) -> CashflowResult<Transaction> {
        let date = self
            .parse_date(record.date.trim())
            .ok_or_else(|| {
                CashflowError::malformed(row, "date", &record.date, "unrecognized date format")
            })?;

        let amount = Money::parse(&record.amount)
            .map_err(|e| CashflowError::malformed(row, "amount", &record.amount, e.to_string()))?;

        if amount.is_negative() {
            return Err(CashflowError::malformed(
                row,
                "amount",
                &record.amount,
                "amount must not be negative; use the type column for direction",
            ));
        }

        let flow_type: FlowType = record
            .flow_type
            .parse()
            .map_err(|e: String| CashflowError::malformed(row, "type", &record.flow_type, e))?;

        Ok(Transaction {
            date,
            description: record.description.trim().to_string(),
            category: record.category.trim().to_string(),
            flow_type,
            amount,
        })
    }

    /// Parse a date string using multiple format attempts
    fn parse_date(&self, s: &str) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(s, &self.date_format) {
            return Some(date);
        }

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
                    .map(|dt| dt.date())
            })
    }
}

/// Normalize records strictly with default settings
pub fn normalize(records: &[RawTransaction]) -> CashflowResult<Vec<Transaction>> {
    Normalizer::new()
        .normalize(records)
        .map(|normalized| normalized.transactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, flow_type: &str, amount: &str) -> RawTransaction {
        RawTransaction::new(date, "  Invoice 7 ", " Sales ", flow_type, amount)
    }

    #[test]
    fn test_normalize_valid_records() {
        let records = vec![
            raw("2025-01-06", "inflow", "100.00"),
            raw("2025-01-07", "Outflow", "₹1,250.50"),
        ];

        let txns = normalize(&records).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(txns[0].flow_type, FlowType::Inflow);
        assert_eq!(txns[0].amount.cents(), 10000);
        assert_eq!(txns[0].description, "Invoice 7");
        assert_eq!(txns[0].category, "Sales");
        assert_eq!(txns[1].flow_type, FlowType::Outflow);
        assert_eq!(txns[1].amount.cents(), 125050);
    }

    #[test]
    fn test_various_date_formats() {
        let normalizer = Normalizer::new();
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        for s in ["2025-01-15", "01/15/2025", "2025/01/15", "2025-01-15 09:30:00"] {
            let txn = normalizer
                .normalize_record(0, &raw(s, "inflow", "1"))
                .unwrap();
            assert_eq!(txn.date, expected, "format {}", s);
        }
    }

    #[test]
    fn test_primary_format_wins_for_ambiguous_dates() {
        let normalizer = Normalizer::new().with_date_format("%d/%m/%Y");
        let txn = normalizer
            .normalize_record(0, &raw("03/04/2025", "inflow", "1"))
            .unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2025, 4, 3).unwrap());
    }

    #[test]
    fn test_bad_date_is_malformed() {
        let records = vec![raw("2025-01-06", "inflow", "1"), raw("soon", "inflow", "1")];
        let err = normalize(&records).unwrap_err();

        match err {
            CashflowError::MalformedInput {
                row, field, value, ..
            } => {
                assert_eq!(row, 1);
                assert_eq!(field, "date");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_amount_is_malformed() {
        let err = normalize(&[raw("2025-01-06", "inflow", "12abc")]).unwrap_err();
        assert!(matches!(
            err,
            CashflowError::MalformedInput { field: "amount", .. }
        ));
    }

    #[test]
    fn test_negative_amount_is_malformed() {
        let err = normalize(&[raw("2025-01-06", "outflow", "-5")]).unwrap_err();
        assert!(matches!(
            err,
            CashflowError::MalformedInput { field: "amount", .. }
        ));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = normalize(&[raw("2025-01-06", "refund", "5")]).unwrap_err();
        match err {
            CashflowError::MalformedInput { field, value, .. } => {
                assert_eq!(field, "type");
                assert_eq!(value, "refund");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lenient_mode_skips_bad_rows() {
        let records = vec![
            raw("2025-01-06", "inflow", "10"),
            raw("2025-01-06", "transfer", "10"),
            raw("not a date", "outflow", "10"),
            raw("2025-01-07", "outflow", "4"),
        ];

        let normalized = Normalizer::new()
            .with_mode(NormalizeMode::Lenient)
            .normalize(&records)
            .unwrap();

        assert_eq!(normalized.transactions.len(), 2);
        assert_eq!(normalized.skipped.len(), 2);
        assert!(normalized.skipped.iter().all(|e| e.is_malformed_input()));
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[]).unwrap().is_empty());
    }
}
