//! Question/answer layer over a finished forecast
//!
//! Questions are first checked against a cash-flow topic guard. On-topic
//! questions are answered from a read-only [`ForecastReport`]; the flattened
//! text context produced by [`build_context`] is what an external language
//! model would be given alongside the question.

pub mod context;
pub mod rules;

pub use context::build_context;
pub use rules::RuleBasedExplainer;

use crate::error::CashflowResult;
use crate::reports::ForecastReport;

/// Reply given to questions outside the cash-flow domain
pub const OFF_TOPIC_REPLY: &str = "I'm sorry, but I can only answer questions related to your \
     cashflow forecast. Please ask me about your weekly projections, risk levels, recommended \
     actions, or any cashflow-related concerns.";

/// Keywords that mark a question as cash-flow related
const CASHFLOW_KEYWORDS: &[&str] = &[
    "cashflow", "cash flow", "cash", "flow", "inflow", "outflow", "balance", "payment",
    "invoice", "forecast", "projection", "predict", "estimate", "week", "weekly", "month",
    "monthly", "risk", "risky", "safe", "tight", "buffer", "receivable", "payable", "revenue",
    "expense", "financial", "finance", "money", "rupee", "₹", "recommendation", "advice",
    "suggest", "action", "crunch", "shortage", "surplus", "deficit", "alert", "warning",
    "problem", "issue",
];

/// Check whether a question is about cash flow
pub fn is_cashflow_related(question: &str) -> bool {
    let question = question.to_lowercase();
    CASHFLOW_KEYWORDS.iter().any(|k| question.contains(k))
}

/// Answers questions about a forecast without modifying it
pub trait Explainer {
    /// Answer a question using the report as context
    fn answer(&self, question: &str, report: &ForecastReport) -> CashflowResult<String>;
}
