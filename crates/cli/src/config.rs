//! Command-line flags with environment-variable fallbacks.

use std::path::PathBuf;

use clap::Parser;

/// Env var selecting JSON log lines (`1`, `true` or `json`).
pub const LOG_JSON_ENV: &str = "LEDGER_BALANCE_LOG_JSON";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "ledger-balance",
    version,
    about = "Account balance report from a ledger"
)]
pub struct Cli {
    /// Ledger document (JSON with `accounts` and `journal_entries`)
    #[arg(short = 'l', long = "ledger", env = "LEDGER_BALANCE_LEDGER")]
    pub ledger: PathBuf,

    /// Filter line: `startAccount endAccount startPeriod endPeriod format`,
    /// `*` for an open side. Read from stdin when absent.
    #[arg(short = 'f', long = "filter", env = "LEDGER_BALANCE_FILTER")]
    pub filter: Option<String>,

    /// Digits after the decimal point when printing minor-unit amounts
    #[arg(
        long = "decimal-places",
        env = "LEDGER_BALANCE_DECIMAL_PLACES",
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(0..=18)
    )]
    pub decimal_places: u32,
}
