//! CLI command for the historical weekly view

use clap::Args;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::{format_transaction_register, format_weekly_history};
use crate::error::CashflowResult;
use crate::services::aggregate_weekly;

use super::forecast::load_transactions;

/// Arguments of `cashflow history`
#[derive(Args, Debug)]
pub struct HistoryCommand {
    /// Path to the transaction CSV (date, type, amount columns)
    pub file: PathBuf,

    /// Skip malformed rows instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Also list the normalized transactions
    #[arg(short, long)]
    pub transactions: bool,
}

/// Handle `cashflow history`
pub fn handle_history_command(settings: &Settings, cmd: HistoryCommand) -> CashflowResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let transactions = load_transactions(&cmd.file, cmd.lenient, settings)?;
    let history = aggregate_weekly(&transactions)?;

    println!("Weekly History ({} transactions)", transactions.len());
    println!("{}", "=".repeat(60));
    print!("{}", format_weekly_history(&history, symbol));

    if cmd.transactions {
        println!();
        print!("{}", format_transaction_register(&transactions, symbol));
    }

    Ok(())
}
