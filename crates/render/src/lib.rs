//! Report presentation: delimited text or HTML table, each behind a summary
//! header.
//!
//! Numeric formatting lives here; the aggregator hands over raw minor units.

pub mod delimited;
pub mod error;
pub mod format;
pub mod header;
pub mod html;

use ledger_balance_accounting::{FilterCriteria, OutputFormat, Report};

pub use error::{RenderError, RenderResult};
pub use format::{format_amount, period_to_string};

/// Rendering knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Digits after the decimal point when printing minor units.
    pub decimal_places: u32,
}

impl RenderOptions {
    pub fn with_decimal_places(decimal_places: u32) -> Self {
        Self {
            decimal_places: decimal_places.min(format::MAX_DECIMAL_PLACES),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { decimal_places: 2 }
    }
}

/// Render `report` in `format`, or `None` when no format is selected.
pub fn render(
    report: &Report,
    criteria: &FilterCriteria,
    format: Option<OutputFormat>,
    options: &RenderOptions,
) -> RenderResult<Option<String>> {
    let Some(format) = format else {
        tracing::debug!("no output format selected; nothing to render");
        return Ok(None);
    };

    let mut out = header::header(report, criteria, options);
    match format {
        OutputFormat::Csv => out.push_str(&delimited::to_csv(report, options)?),
        OutputFormat::Html => out.push_str(&html::to_html(report, options)),
    }

    tracing::debug!(?format, rows = report.rows.len(), "report rendered");
    Ok(Some(out))
}
