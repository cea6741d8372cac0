//! Chart of accounts lookup.

use std::collections::HashMap;

use ledger_balance_core::{AccountNumber, Entity};

use crate::ledger::Account;

/// Account number → label mapping.
///
/// Serves both as the existence filter for journal entries and as the
/// description lookup for report rows, so it is built once per report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartOfAccounts<'a> {
    labels: HashMap<AccountNumber, &'a str>,
}

impl<'a> ChartOfAccounts<'a> {
    /// Index the given accounts. On duplicate numbers the last label wins.
    pub fn from_accounts(accounts: &'a [Account]) -> Self {
        let labels = accounts
            .iter()
            .map(|account| (*account.id(), account.label.as_str()))
            .collect();
        Self { labels }
    }

    pub fn contains(&self, number: AccountNumber) -> bool {
        self.labels.contains_key(&number)
    }

    pub fn label(&self, number: AccountNumber) -> Option<&'a str> {
        self.labels.get(&number).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
