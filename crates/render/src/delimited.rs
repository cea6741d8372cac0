//! Delimited text table.

use csv::{Terminator, WriterBuilder};

use ledger_balance_accounting::Report;

use crate::RenderOptions;
use crate::error::RenderResult;
use crate::format::format_amount;

pub const COLUMNS: [&str; 5] = ["ACCOUNT", "DESCRIPTION", "DEBIT", "CREDIT", "BALANCE"];

/// One record per row behind a column header line; descriptions that contain
/// delimiters or quotes are quoted.
pub fn to_csv(report: &Report, options: &RenderOptions) -> RenderResult<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for row in &report.rows {
        writer.write_record([
            row.account.to_string(),
            row.description.clone(),
            format_amount(row.debit, options.decimal_places),
            format_amount(row.credit, options.decimal_places),
            format_amount(row.balance, options.decimal_places),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
