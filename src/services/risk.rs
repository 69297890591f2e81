//! Risk classification
//!
//! A projected balance is compared against the run's buffer amount. Checks
//! run in a fixed order and are boundary-inclusive: exactly twice the buffer
//! is safe, exactly the buffer is tight. With a zero buffer only negative
//! balances are risky.

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Money, RiskLevel};

/// Classifies projected balances against a fixed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskClassifier {
    buffer: Money,
}

impl RiskClassifier {
    /// Create a classifier for the given buffer amount
    pub fn new(buffer: Money) -> Self {
        Self { buffer }
    }

    /// Derive the buffer from the average weekly outflow
    ///
    /// The outflow average is floored at zero before the multiplier is
    /// applied, so the buffer is never negative for a non-negative multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`CashflowError::InvalidParameter`] when the scaled buffer does
    /// not fit in the amount range.
    pub fn from_average_outflow(
        average_outflow: Money,
        risk_multiplier: f64,
    ) -> CashflowResult<Self> {
        average_outflow
            .non_negative()
            .scale(risk_multiplier)
            .map(Self::new)
            .ok_or_else(|| {
                CashflowError::invalid_parameter(
                    "risk_multiplier",
                    risk_multiplier,
                    format!(
                        "buffer of {} x average outflow {} exceeds the supported amount range",
                        risk_multiplier, average_outflow
                    ),
                )
            })
    }

    /// The buffer amount used as the classification threshold
    pub fn buffer(&self) -> Money {
        self.buffer
    }

    /// Classify a projected balance
    ///
    /// When twice the buffer is out of range no balance can reach it, so the
    /// safe band is empty.
    pub fn classify(&self, balance: Money) -> RiskLevel {
        let safe = self
            .buffer
            .checked_add(self.buffer)
            .is_some_and(|twice| balance >= twice);

        if safe {
            RiskLevel::Safe
        } else if balance >= self.buffer {
            RiskLevel::Tight
        } else {
            RiskLevel::Risky
        }
    }
}
