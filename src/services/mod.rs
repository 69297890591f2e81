//! Service layer for cashflow-cli
//!
//! The forecasting pipeline, leaf-first: CSV loading, normalization, balance
//! estimation, weekly aggregation, risk classification and projection. Every
//! stage after loading is a pure function of its inputs.

pub mod aggregate;
pub mod balance;
pub mod forecast;
pub mod import;
pub mod normalize;
pub mod risk;

pub use aggregate::aggregate_weekly;
pub use balance::{estimate_initial_balance, flow_totals, FlowTotals};
pub use forecast::{forecast, project, ForecastOptions, DEFAULT_HORIZON_WEEKS, DEFAULT_RISK_MULTIPLIER};
pub use import::{load_csv, read_csv};
pub use normalize::{normalize, NormalizeMode, Normalized, Normalizer};
pub use risk::RiskClassifier;
