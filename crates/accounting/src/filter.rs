//! Report filter criteria and their resolution into inclusive ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledger_balance_core::{AccountNumber, Bound, InclusiveRange};

use crate::ledger::JournalEntry;

/// User-supplied report filter.
///
/// Every field is optional; a missing value means "unbounded" on that side.
/// Raw text that fails to parse never reaches this type as an error, see
/// [`crate::input::UserInput::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub start_account: Option<AccountNumber>,
    #[serde(default)]
    pub end_account: Option<AccountNumber>,
    #[serde(default)]
    pub start_period: Option<NaiveDate>,
    #[serde(default)]
    pub end_period: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Criteria that let every entry of a known account through.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_accounts(
        mut self,
        start: Option<AccountNumber>,
        end: Option<AccountNumber>,
    ) -> Self {
        self.start_account = start;
        self.end_account = end;
        self
    }

    pub fn with_periods(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_period = start;
        self.end_period = end;
        self
    }

    pub fn resolve(&self) -> ResolvedCriteria {
        ResolvedCriteria {
            accounts: InclusiveRange::new(
                Bound::from(self.start_account),
                Bound::from(self.end_account),
            ),
            periods: InclusiveRange::new(
                Bound::from(self.start_period),
                Bound::from(self.end_period),
            ),
        }
    }
}

/// Filter with every side resolved to an explicit bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCriteria {
    pub accounts: InclusiveRange<AccountNumber>,
    pub periods: InclusiveRange<NaiveDate>,
}

impl ResolvedCriteria {
    /// Account and period test only; chart membership is checked separately.
    pub fn matches(&self, entry: &JournalEntry) -> bool {
        self.accounts.contains(&entry.account) && self.periods.contains(&entry.period)
    }
}
