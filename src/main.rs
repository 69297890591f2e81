use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cashflow::cli::{
    handle_ask_command, handle_forecast_command, handle_history_command, AskCommand,
    ForecastCommand, HistoryCommand,
};
use cashflow::config::{paths::CashflowPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "cashflow",
    version,
    about = "Weekly cash-flow forecasting and risk classification",
    long_about = "cashflow reads a CSV of historical inflows and outflows, projects \
                  week-by-week balances from the historical weekly averages, and \
                  flags the weeks where cash drops close to or below a safety buffer."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast weekly balances and risk levels
    Forecast(ForecastCommand),

    /// Ask a question about a forecast
    Ask(AskCommand),

    /// Show historical weekly totals
    History(HistoryCommand),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = CashflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Forecast(cmd)) => handle_forecast_command(&settings, cmd)?,
        Some(Commands::Ask(cmd)) => handle_ask_command(&settings, cmd)?,
        Some(Commands::History(cmd)) => handle_history_command(&settings, cmd)?,
        Some(Commands::Init) => {
            println!("Initializing cashflow-cli at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("cashflow-cli Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Horizon (weeks):  {}", settings.default_horizon_weeks);
            println!("  Risk multiplier:  {}", settings.risk_multiplier);
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Lenient import:   {}", settings.lenient_import);
        }
        None => {
            println!("cashflow - weekly cash-flow forecasting");
            println!();
            println!("Run 'cashflow --help' for usage information.");
            println!("Run 'cashflow forecast <FILE>' to forecast from a transaction CSV.");
        }
    }

    Ok(())
}
