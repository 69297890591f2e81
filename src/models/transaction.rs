//! Transaction model
//!
//! Raw records as they arrive from the data-loading boundary, and the
//! canonical typed transactions the forecasting engine consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Direction of a cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    /// Cash received by the business
    Inflow,
    /// Cash paid out by the business
    Outflow,
}

impl FlowType {
    pub fn is_inflow(&self) -> bool {
        matches!(self, Self::Inflow)
    }

    pub fn is_outflow(&self) -> bool {
        matches!(self, Self::Outflow)
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inflow => write!(f, "inflow"),
            Self::Outflow => write!(f, "outflow"),
        }
    }
}

impl FromStr for FlowType {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inflow" => Ok(Self::Inflow),
            "outflow" => Ok(Self::Outflow),
            other => Err(format!(
                "unknown transaction type '{}', expected 'inflow' or 'outflow'",
                other
            )),
        }
    }
}

/// An untyped transaction record, field values exactly as supplied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type")]
    pub flow_type: String,
    pub amount: String,
}

impl RawTransaction {
    /// Build a raw record from string-like parts
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        flow_type: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            category: category.into(),
            flow_type: flow_type.into(),
            amount: amount.into(),
        }
    }
}

/// A validated financial transaction
///
/// `amount` is never negative; the direction lives in `flow_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub flow_type: FlowType,
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction with empty description and category
    pub fn new(date: NaiveDate, flow_type: FlowType, amount: Money) -> Self {
        Self {
            date,
            description: String::new(),
            category: String::new(),
            flow_type,
            amount,
        }
    }

    /// Create a transaction with all fields
    pub fn with_details(
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        flow_type: FlowType,
        amount: Money,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category: category.into(),
            flow_type,
            amount,
        }
    }

    pub fn is_inflow(&self) -> bool {
        self.flow_type.is_inflow()
    }

    pub fn is_outflow(&self) -> bool {
        self.flow_type.is_outflow()
    }

    /// Amount with the direction applied (negative for outflows)
    pub fn signed_amount(&self) -> Money {
        match self.flow_type {
            FlowType::Inflow => self.amount,
            FlowType::Outflow => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.flow_type,
            self.amount,
            self.description
        )
    }
}
