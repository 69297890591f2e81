//! CLI commands for forecasting
//!
//! Loads a transaction CSV, runs the forecast pipeline and renders the
//! resulting report, or answers a question about it.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::settings::Settings;
use crate::display::format_skipped_rows;
use crate::error::{CashflowError, CashflowResult};
use crate::explain::{build_context, Explainer, RuleBasedExplainer};
use crate::export::{export_forecast_json, export_forecast_yaml, import_from_json};
use crate::models::{Money, Transaction};
use crate::reports::ForecastReport;
use crate::services::{forecast, load_csv, ForecastOptions, NormalizeMode, Normalizer};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary, weekly table, alerts and recommendations
    Table,
    /// Versioned JSON document
    Json,
    /// Versioned YAML document
    Yaml,
    /// Weekly points only
    Csv,
}

/// Options shared by every command that builds a forecast
#[derive(Args, Debug, Clone)]
pub struct ForecastArgs {
    /// Path to the transaction CSV (date, type, amount columns)
    pub file: PathBuf,

    /// Number of weeks to project
    #[arg(short, long)]
    pub weeks: Option<u32>,

    /// Opening balance; estimated from history when omitted
    #[arg(short, long, allow_hyphen_values = true)]
    pub balance: Option<String>,

    /// Multiplier applied to the average weekly outflow for the buffer
    #[arg(short, long, allow_negative_numbers = true)]
    pub risk_multiplier: Option<f64>,

    /// Date to forecast from (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub today: Option<String>,

    /// Skip malformed rows instead of failing
    #[arg(long)]
    pub lenient: bool,
}

/// Arguments of `cashflow forecast`
#[derive(Args, Debug)]
pub struct ForecastCommand {
    #[command(flatten)]
    pub forecast: ForecastArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments of `cashflow ask`
#[derive(Args, Debug)]
pub struct AskCommand {
    #[command(flatten)]
    pub forecast: ForecastArgs,

    /// Question about the forecast
    pub question: String,

    /// Print the text context the answer is drawn from
    #[arg(long)]
    pub show_context: bool,
}

impl ForecastArgs {
    /// Build forecast options, command-line values taking precedence
    pub fn options(&self, settings: &Settings) -> CashflowResult<ForecastOptions> {
        let mut options = ForecastOptions::new()
            .with_horizon(self.weeks.unwrap_or(settings.default_horizon_weeks))
            .with_risk_multiplier(self.risk_multiplier.unwrap_or(settings.risk_multiplier));

        if let Some(balance) = &self.balance {
            let amount = Money::parse(balance).map_err(|e| {
                CashflowError::invalid_parameter("initial_balance", balance, e.to_string())
            })?;
            options = options.with_initial_balance(amount);
        }

        if let Some(today) = &self.today {
            options = options.with_today(parse_date(today)?);
        }

        options.validate()?;
        Ok(options)
    }

    /// Run the whole pipeline and build the report
    pub fn build_report(&self, settings: &Settings) -> CashflowResult<ForecastReport> {
        // Parameters are checked before the file is touched
        let options = self.options(settings)?;
        let transactions = load_transactions(&self.file, self.lenient, settings)?;
        let result = forecast(&transactions, &options)?;

        info!(
            file = %self.file.display(),
            transactions = transactions.len(),
            weeks = result.points.len(),
            "built forecast report"
        );

        ForecastReport::generate(&transactions, result)
    }
}

fn normalize_mode(lenient: bool, settings: &Settings) -> NormalizeMode {
    if lenient || settings.lenient_import {
        NormalizeMode::Lenient
    } else {
        NormalizeMode::Strict
    }
}

/// Load and normalize a transaction file
///
/// Rows skipped in lenient mode are reported on stderr.
pub fn load_transactions(
    file: &Path,
    lenient: bool,
    settings: &Settings,
) -> CashflowResult<Vec<Transaction>> {
    let records = load_csv(file)?;
    let normalized = Normalizer::new()
        .with_date_format(&settings.date_format)
        .with_mode(normalize_mode(lenient, settings))
        .normalize(&records)?;

    if !normalized.skipped.is_empty() {
        eprint!("{}", format_skipped_rows(&normalized.skipped));
    }

    Ok(normalized.transactions)
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> CashflowResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CashflowError::invalid_parameter("today", s, "expected YYYY-MM-DD"))
}

/// Handle `cashflow forecast`
pub fn handle_forecast_command(settings: &Settings, cmd: ForecastCommand) -> CashflowResult<()> {
    let report = cmd.forecast.build_report(settings)?;
    let symbol = settings.currency_symbol.as_str();

    match &cmd.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CashflowError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_report(&report, cmd.format, symbol, &mut writer)?;
            writer.flush()?;
            println!("Forecast written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_report(&report, cmd.format, symbol, &mut writer)?;
        }
    }

    Ok(())
}

/// Render a report in the requested format
pub fn write_report<W: Write>(
    report: &ForecastReport,
    format: OutputFormat,
    symbol: &str,
    writer: &mut W,
) -> CashflowResult<()> {
    match format {
        OutputFormat::Table => write!(writer, "{}", report.format_terminal(symbol))?,
        OutputFormat::Json => export_forecast_json(report, symbol, writer, true)?,
        OutputFormat::Yaml => export_forecast_yaml(report, symbol, writer)?,
        OutputFormat::Csv => report.export_csv(writer)?,
    }
    Ok(())
}

/// Handle `cashflow ask`
///
/// The file may be a transaction CSV or a JSON export from
/// `cashflow forecast --format json`; the latter is answered as exported.
pub fn handle_ask_command(settings: &Settings, cmd: AskCommand) -> CashflowResult<()> {
    let (report, symbol) = if is_json(&cmd.forecast.file) {
        let contents = std::fs::read_to_string(&cmd.forecast.file).map_err(|e| {
            CashflowError::Import(format!(
                "Failed to read {}: {}",
                cmd.forecast.file.display(),
                e
            ))
        })?;
        let export = import_from_json(&contents)?;
        (export.report, export.currency_symbol)
    } else {
        (
            cmd.forecast.build_report(settings)?,
            settings.currency_symbol.clone(),
        )
    };

    if cmd.show_context {
        println!("{}", build_context(&report, &symbol));
        println!();
    }

    let explainer = RuleBasedExplainer::new(symbol);
    println!("{}", explainer.answer(&cmd.question, &report)?);

    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
