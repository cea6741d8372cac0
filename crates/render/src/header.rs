//! Summary header: totals and the resolved filter window.

use ledger_balance_accounting::{FilterCriteria, Report};

use crate::RenderOptions;
use crate::format::{account_to_string, format_amount, period_to_string};

/// Two lines: totals, then the account/period bounds (`*` when unbounded).
pub fn header(report: &Report, criteria: &FilterCriteria, options: &RenderOptions) -> String {
    let resolved = criteria.resolve();
    format!(
        "Total Debit: {} Total Credit: {}\nBalance from account {} to {} from period {} to {}\n",
        format_amount(report.total_debit, options.decimal_places),
        format_amount(report.total_credit, options.decimal_places),
        account_to_string(&resolved.accounts.start),
        account_to_string(&resolved.accounts.end),
        period_to_string(&resolved.periods.start),
        period_to_string(&resolved.periods.end),
    )
}
