//! Accounting module (chart of accounts, journal, balance report).
//!
//! Pure domain logic only: no IO, no rendering, no persistence concerns.

pub mod balance;
pub mod chart;
pub mod filter;
pub mod input;
pub mod ledger;

pub use balance::{BalanceRow, Report, compute_balance};
pub use chart::ChartOfAccounts;
pub use filter::{FilterCriteria, ResolvedCriteria};
pub use input::{OutputFormat, UserInput};
pub use ledger::{Account, JournalEntry, Ledger};
