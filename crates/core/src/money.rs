//! Monetary amounts in minor units.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::value_object::ValueObject;

/// Non-negative amount of a single journal entry side, in the smallest
/// currency unit (e.g. cents).
///
/// Deserialization goes through [`TryFrom<i64>`], so a negative value in a
/// ledger document is rejected rather than silently accepted.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn new(minor_units: i64) -> Result<Self, LedgerError> {
        Self::try_from(minor_units)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Widened value used when summing; sums of `i64` may overflow `i64`.
    pub const fn wide(self) -> i128 {
        self.0 as i128
    }
}

impl ValueObject for Amount {}

impl TryFrom<i64> for Amount {
    type Error = LedgerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(LedgerError::invalid_amount(format!(
                "amount must not be negative (got {value})"
            )));
        }
        Ok(Self(value))
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
