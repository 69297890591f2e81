//! Transaction display formatting
//!
//! Register view of normalized transactions and of rows skipped during a
//! lenient import.

use crate::error::CashflowError;
use crate::models::Transaction;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let direction = if txn.is_inflow() { "+" } else { "-" };
    let description = if txn.description.is_empty() {
        "(no description)"
    } else {
        txn.description.as_str()
    };

    format!(
        "{} {} {:<24} {:<14} {:>14}",
        txn.date.format("%Y-%m-%d"),
        direction,
        truncate(description, 24),
        truncate(&txn.category, 14),
        txn.amount.format_with_symbol(symbol)
    )
}

/// Format transactions as a register, oldest first
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {} {:<24} {:<14} {:>14}\n",
        "Date", " ", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for txn in sorted {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Format the rows skipped by a lenient import
pub fn format_skipped_rows(skipped: &[CashflowError]) -> String {
    let mut output = format!("Skipped {} malformed row(s):\n", skipped.len());
    for err in skipped {
        output.push_str(&format!("  - {}\n", err));
    }
    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlowType, Money};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_register_sorted_by_date() {
        let txns = vec![
            Transaction::with_details(
                date(2025, 1, 8),
                "Rent",
                "Premises",
                FlowType::Outflow,
                Money::from_units(900),
            ),
            Transaction::new(date(2025, 1, 6), FlowType::Inflow, Money::from_units(100)),
        ];

        let output = format_transaction_register(&txns, "₹");
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("2025-01-06 + (no description)"));
        assert!(lines[3].starts_with("2025-01-08 - Rent"));
        assert!(lines[3].ends_with("₹900.00"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_transaction_register(&[], "₹"), "No transactions found.\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Quarterly GST payment", 10), "Quarter...");
        assert_eq!(truncate("Rent", 10), "Rent");
    }

    #[test]
    fn test_skipped_rows() {
        let skipped = vec![CashflowError::malformed(3, "amount", "abc", "not a number")];
        let output = format_skipped_rows(&skipped);
        assert!(output.starts_with("Skipped 1 malformed row(s):"));
        assert!(output.contains("abc"));
    }
}
