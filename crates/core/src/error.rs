//! Ledger error model.

use thiserror::Error;

/// Result type used at the ledger construction and parsing boundaries.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Raised only when building typed ledger data from raw input. Report
/// computation itself never fails: malformed filter values widen to
/// unbounded instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// An account number could not be parsed.
    #[error("invalid account number: {0}")]
    InvalidAccountNumber(String),

    /// An amount was negative or otherwise unusable.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A period could not be parsed as a calendar date.
    #[error("invalid period: {0}")]
    InvalidPeriod(String),
}

impl LedgerError {
    pub fn invalid_account_number(msg: impl Into<String>) -> Self {
        Self::InvalidAccountNumber(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_period(msg: impl Into<String>) -> Self {
        Self::InvalidPeriod(msg.into())
    }
}
