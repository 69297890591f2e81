//! Offline explainer answering from the forecast figures

use tracing::debug;

use crate::error::CashflowResult;
use crate::models::RiskLevel;
use crate::reports::ForecastReport;

use super::{is_cashflow_related, Explainer, OFF_TOPIC_REPLY};

/// What a question is mainly about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Risk,
    Buffer,
    Advice,
    Inflow,
    Outflow,
    Balance,
    Overview,
}

impl Topic {
    fn of(question: &str) -> Self {
        let q = question.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| q.contains(w));

        if mentions(&["risk", "alert", "warning", "danger", "crunch", "shortage", "tight"]) {
            Self::Risk
        } else if mentions(&["buffer", "reserve", "cushion"]) {
            Self::Buffer
        } else if mentions(&["recommend", "advice", "advise", "suggest", "action", "should"]) {
            Self::Advice
        } else if mentions(&["inflow", "revenue", "receivable", "income", "sales"]) {
            Self::Inflow
        } else if mentions(&["outflow", "expense", "payable", "spend", "cost"]) {
            Self::Outflow
        } else if mentions(&["balance", "surplus", "deficit"]) {
            Self::Balance
        } else {
            Self::Overview
        }
    }
}

/// Answers on-topic questions directly from the report figures
#[derive(Debug, Clone)]
pub struct RuleBasedExplainer {
    symbol: String,
}

impl RuleBasedExplainer {
    /// Create an explainer formatting amounts with `symbol`
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    fn risk_answer(&self, report: &ForecastReport) -> String {
        let forecast = &report.forecast;
        let risky: Vec<_> = forecast.weeks_at(RiskLevel::Risky).collect();
        let tight: Vec<_> = forecast.weeks_at(RiskLevel::Tight).collect();

        if risky.is_empty() && tight.is_empty() {
            return format!(
                "All {} forecast weeks are safe: the projected balance stays at or above twice \
                 your buffer of {}.",
                forecast.points.len(),
                forecast.buffer_amount.format_with_symbol(&self.symbol)
            );
        }

        let mut answer = String::new();
        if let Some(first) = risky.first() {
            answer.push_str(&format!(
                "{} of {} weeks are risky. The first is the week starting {}, when the balance \
                 is projected at {} against a buffer of {}.",
                risky.len(),
                forecast.points.len(),
                first.week_start,
                first.projected_balance.format_with_symbol(&self.symbol),
                forecast.buffer_amount.format_with_symbol(&self.symbol)
            ));
        }
        if !tight.is_empty() {
            if !answer.is_empty() {
                answer.push(' ');
            }
            let starts: Vec<String> = tight.iter().map(|p| p.week_start.to_string()).collect();
            answer.push_str(&format!(
                "Cash is tight in the week(s) starting {}.",
                starts.join(", ")
            ));
        }
        answer
    }

    fn buffer_answer(&self, report: &ForecastReport) -> String {
        let forecast = &report.forecast;
        format!(
            "Your recommended buffer is {}, derived from your average weekly outflow of {}. \
             Weeks at or above twice the buffer are safe, weeks at or above the buffer are \
             tight, and anything lower is risky.",
            forecast.buffer_amount.format_with_symbol(&self.symbol),
            forecast.average_outflow.format_with_symbol(&self.symbol)
        )
    }

    fn advice_answer(&self, report: &ForecastReport) -> String {
        report
            .recommendation_messages(&self.symbol)
            .iter()
            .enumerate()
            .map(|(idx, message)| format!("{}. {}", idx + 1, message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn inflow_answer(&self, report: &ForecastReport) -> String {
        format!(
            "Historically you received {} in total, about {} per active week. The forecast \
             assumes that weekly average continues.",
            report.totals.inflow.format_with_symbol(&self.symbol),
            report.forecast.average_inflow.format_with_symbol(&self.symbol)
        )
    }

    fn outflow_answer(&self, report: &ForecastReport) -> String {
        format!(
            "Historically you paid out {} in total, about {} per active week. The forecast \
             assumes that weekly average continues.",
            report.totals.outflow.format_with_symbol(&self.symbol),
            report.forecast.average_outflow.format_with_symbol(&self.symbol)
        )
    }

    fn balance_answer(&self, report: &ForecastReport) -> String {
        let forecast = &report.forecast;
        let mut answer = format!(
            "Starting from {}, the balance is projected to reach {} after {} weeks.",
            forecast.initial_balance.format_with_symbol(&self.symbol),
            forecast.closing_balance().format_with_symbol(&self.symbol),
            forecast.points.len()
        );
        if let Some(lowest) = forecast.lowest_point() {
            answer.push_str(&format!(
                " The lowest point is {} in the week starting {}.",
                lowest.projected_balance.format_with_symbol(&self.symbol),
                lowest.week_start
            ));
        }
        answer
    }

    fn overview_answer(&self, report: &ForecastReport) -> String {
        let forecast = &report.forecast;
        let net = forecast.average_inflow - forecast.average_outflow;
        let direction = if net.is_negative() {
            "shrinks"
        } else if net.is_zero() {
            "stays flat"
        } else {
            "grows"
        };
        format!(
            "Your cash {} by about {} per week. {}",
            direction,
            net.abs().format_with_symbol(&self.symbol),
            self.risk_answer(report)
        )
    }
}

impl Explainer for RuleBasedExplainer {
    fn answer(&self, question: &str, report: &ForecastReport) -> CashflowResult<String> {
        if !is_cashflow_related(question) {
            return Ok(OFF_TOPIC_REPLY.to_string());
        }

        let topic = Topic::of(question);
        debug!(?topic, "answering forecast question");

        Ok(match topic {
            Topic::Risk => self.risk_answer(report),
            Topic::Buffer => self.buffer_answer(report),
            Topic::Advice => self.advice_answer(report),
            Topic::Inflow => self.inflow_answer(report),
            Topic::Outflow => self.outflow_answer(report),
            Topic::Balance => self.balance_answer(report),
            Topic::Overview => self.overview_answer(report),
        })
    }
}
