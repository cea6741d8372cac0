//! Single-line user input: `startAccount endAccount startPeriod endPeriod format`.
//!
//! Example: `1000 5000 MAR-16 APR-16 CSV`, or `* 2000 * * HTML`. Parsing is
//! lenient: every token that is missing or malformed widens its side of the
//! filter to unbounded instead of failing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledger_balance_core::{AccountNumber, LedgerError, LedgerResult};

use crate::filter::FilterCriteria;

/// Output selector; consumed by renderers only, never by the aggregator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputFormat {
    /// Delimited text table.
    Csv,
    /// Structured table markup.
    Html,
}

impl OutputFormat {
    /// Case-insensitive; unknown selectors yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if token.eq_ignore_ascii_case("html") {
            Some(Self::Html)
        } else {
            None
        }
    }
}

/// Parsed filter line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub criteria: FilterCriteria,
    /// `None` means nothing should be rendered.
    pub format: Option<OutputFormat>,
}

impl UserInput {
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let mut next = || tokens.next().unwrap_or("*");

        let start_account = parse_account(next());
        let end_account = parse_account(next());
        let start_period = parse_period(next());
        let end_period = parse_period(next());
        let format = OutputFormat::parse(next());

        Self {
            criteria: FilterCriteria {
                start_account,
                end_account,
                start_period,
                end_period,
            },
            format,
        }
    }
}

/// `None` for wildcards and anything that is not an unsigned integer.
///
/// Digit strings beyond `u32::MAX` clamp to the largest account number, so a
/// start bound past every account still excludes them all.
pub fn parse_account(token: &str) -> Option<AccountNumber> {
    match token.parse::<AccountNumber>() {
        Ok(account) => Some(account),
        Err(_) if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) => {
            Some(AccountNumber::new(u32::MAX))
        }
        Err(_) => None,
    }
}

/// Wildcard-aware wrapper around [`try_parse_period`].
pub fn parse_period(token: &str) -> Option<NaiveDate> {
    let token = token.trim();
    if token.is_empty() || token == "*" {
        return None;
    }
    try_parse_period(token).ok()
}

/// Accepts `MMM-YY` (first day of that month) or ISO `YYYY-MM-DD`.
///
/// Two-digit years follow chrono's `%y` window: `00..=69` → 20xx,
/// `70..=99` → 19xx.
pub fn try_parse_period(token: &str) -> LedgerResult<NaiveDate> {
    let token = token.trim();
    NaiveDate::parse_from_str(&format!("01-{token}"), "%d-%b-%y")
        .or_else(|_| NaiveDate::parse_from_str(token, "%Y-%m-%d"))
        .map_err(|e| LedgerError::invalid_period(format!("{token:?}: {e}")))
}
