//! Cell formatting: amounts, account bounds, period bounds.

use chrono::NaiveDate;

use ledger_balance_core::{AccountNumber, Bound};

/// Placeholder for an unbounded filter side.
pub const WILDCARD: &str = "*";

/// Largest supported scale; `10^18` still fits comfortably in `i128`.
pub const MAX_DECIMAL_PLACES: u32 = 18;

/// Format a minor-unit amount with a fixed number of decimals.
///
/// `format_amount(12345, 2) == "123.45"`, `format_amount(-4000, 2) == "-40.00"`.
pub fn format_amount(minor_units: i128, decimal_places: u32) -> String {
    let places = decimal_places.min(MAX_DECIMAL_PLACES);
    if places == 0 {
        return minor_units.to_string();
    }

    let scale = 10u128.pow(places);
    let magnitude = minor_units.unsigned_abs();
    let sign = if minor_units < 0 { "-" } else { "" };
    format!(
        "{sign}{}.{:0width$}",
        magnitude / scale,
        magnitude % scale,
        width = places as usize
    )
}

pub fn account_to_string(bound: &Bound<AccountNumber>) -> String {
    bound
        .as_inclusive()
        .map_or_else(|| WILDCARD.to_string(), AccountNumber::to_string)
}

/// `MMM-YY` upper-case (e.g. `MAR-16`), `*` when unbounded.
pub fn period_to_string(bound: &Bound<NaiveDate>) -> String {
    bound.as_inclusive().map_or_else(
        || WILDCARD.to_string(),
        |date| date.format("%b-%y").to_string().to_uppercase(),
    )
}
