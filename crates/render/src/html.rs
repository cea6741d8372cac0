//! Structured table view (HTML markup).

use std::fmt::Write as _;

use ledger_balance_accounting::Report;

use crate::RenderOptions;
use crate::delimited::COLUMNS;
use crate::format::format_amount;

pub fn to_html(report: &Report, options: &RenderOptions) -> String {
    let mut out = String::from("<table class=\"table\">\n  <thead>\n    <tr>\n");
    for column in COLUMNS {
        let _ = writeln!(out, "      <th>{column}</th>");
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for row in &report.rows {
        out.push_str("    <tr>\n");
        let _ = writeln!(out, "      <th scope=\"row\">{}</th>", row.account);
        let _ = writeln!(out, "      <td>{}</td>", escape(&row.description));
        for amount in [row.debit, row.credit, row.balance] {
            let _ = writeln!(
                out,
                "      <td>{}</td>",
                format_amount(amount, options.decimal_places)
            );
        }
        out.push_str("    </tr>\n");
    }

    out.push_str("  </tbody>\n</table>\n");
    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
