//! Strongly-typed identifiers used across the ledger.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::value_object::ValueObject;

/// Number of an account in the chart of accounts.
///
/// Account numbers are non-negative and order numerically (`2 < 10`), never
/// lexically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u32);

impl AccountNumber {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl ValueObject for AccountNumber {}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for AccountNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<AccountNumber> for u32 {
    fn from(value: AccountNumber) -> Self {
        value.0
    }
}

impl FromStr for AccountNumber {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|e| LedgerError::invalid_account_number(format!("{s:?}: {e}")))?;
        Ok(Self(value))
    }
}
