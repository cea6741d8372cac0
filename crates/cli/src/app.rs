//! Wiring: ledger document + filter line → rendered report.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use ledger_balance_accounting::{Ledger, UserInput};
use ledger_balance_render::{RenderOptions, render};

use crate::config::Cli;

/// Read a ledger document from disk. The file is never written back.
pub fn load_ledger(path: &Path) -> Result<Ledger> {
    let file = File::open(path)
        .with_context(|| format!("failed to open ledger {}", path.display()))?;
    let ledger: Ledger = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse ledger {}", path.display()))?;

    tracing::info!(
        accounts = ledger.accounts.len(),
        entries = ledger.journal_entries.len(),
        "ledger loaded"
    );
    Ok(ledger)
}

fn read_filter_line<R: BufRead>(mut input: R) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read filter line from stdin")?;
    Ok(line)
}

/// Compute and print one report.
///
/// Nothing is written to `out` when the filter line selects no output format.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> Result<()> {
    let ledger = load_ledger(&cli.ledger)?;

    let line = match &cli.filter {
        Some(filter) => filter.clone(),
        None => read_filter_line(input)?,
    };
    let user_input = UserInput::parse(&line);
    tracing::debug!(criteria = ?user_input.criteria, format = ?user_input.format, "filter parsed");

    let report = ledger.balance_report(&user_input.criteria);
    if report.is_empty() {
        tracing::info!("no journal entries match the filter");
    }

    let options = RenderOptions::with_decimal_places(cli.decimal_places);
    match render(&report, &user_input.criteria, user_input.format, &options)? {
        Some(text) => {
            out.write_all(text.as_bytes()).context("failed to write report")?;
            out.flush().context("failed to flush report")?;
        }
        None => tracing::warn!("no output format selected (expected CSV or HTML); nothing rendered"),
    }

    Ok(())
}
