//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod forecast;
pub mod history;

pub use forecast::{
    handle_ask_command, handle_forecast_command, AskCommand, ForecastArgs, ForecastCommand,
    OutputFormat,
};
pub use history::{handle_history_command, HistoryCommand};
