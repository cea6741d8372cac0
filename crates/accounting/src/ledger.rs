use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledger_balance_core::{AccountNumber, Amount, Entity, LedgerResult};

use crate::balance::{Report, compute_balance};
use crate::filter::FilterCriteria;

/// Chart-of-accounts entry: account number + display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub number: AccountNumber, // e.g. 1000
    pub label: String,         // e.g. "Cash"
}

impl Account {
    pub fn new(number: u32, label: impl Into<String>) -> Self {
        Self {
            number: AccountNumber::new(number),
            label: label.into(),
        }
    }
}

impl Entity for Account {
    type Id = AccountNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

/// A single dated debit/credit movement against one account (immutable).
///
/// Both sides are non-negative minor-unit amounts; an entry may carry a debit,
/// a credit, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub account: AccountNumber,
    pub period: NaiveDate,
    #[serde(default)]
    pub debit: Amount,
    #[serde(default)]
    pub credit: Amount,
}

impl JournalEntry {
    /// Build an entry from raw minor-unit amounts, rejecting negative sides.
    pub fn new(account: u32, period: NaiveDate, debit: i64, credit: i64) -> LedgerResult<Self> {
        Ok(Self {
            account: AccountNumber::new(account),
            period,
            debit: Amount::new(debit)?,
            credit: Amount::new(credit)?,
        })
    }
}

/// Ledger snapshot: chart of accounts + journal entries.
///
/// Note: the ledger does NOT hold balances; a [`Report`] is derived from it on
/// demand and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
}

impl Ledger {
    /// Compute the balance report for this snapshot.
    pub fn balance_report(&self, criteria: &FilterCriteria) -> Report {
        compute_balance(&self.journal_entries, &self.accounts, criteria)
    }
}
