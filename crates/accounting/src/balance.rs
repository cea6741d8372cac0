//! Account balance report: filter → aggregate → sort → total.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ledger_balance_core::AccountNumber;

use crate::chart::ChartOfAccounts;
use crate::filter::FilterCriteria;
use crate::ledger::{Account, JournalEntry};

/// Per-account line of a balance report.
///
/// Amounts are summed minor units; `balance` is `debit - credit` and may be
/// negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRow {
    pub account: AccountNumber,
    pub description: String,
    pub debit: i128,
    pub credit: i128,
    pub balance: i128,
}

/// Balance report: rows in strictly ascending account order plus column totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub rows: Vec<BalanceRow>,
    pub total_debit: i128,
    pub total_credit: i128,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, account: AccountNumber) -> Option<&BalanceRow> {
        self.rows
            .binary_search_by_key(&account, |row| row.account)
            .ok()
            .map(|idx| &self.rows[idx])
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    debit: i128,
    credit: i128,
}

/// Compute the balance report for `entries` against the chart `accounts`.
///
/// Entries are kept when their account and period fall inside the (inclusive,
/// possibly unbounded) ranges of `criteria` and their account exists in the
/// chart. Entries of unknown accounts are dropped without error. Never fails:
/// an empty match yields an empty report with zero totals.
pub fn compute_balance(
    entries: &[JournalEntry],
    accounts: &[Account],
    criteria: &FilterCriteria,
) -> Report {
    let chart = ChartOfAccounts::from_accounts(accounts);
    let resolved = criteria.resolve();

    let mut matched = 0usize;
    let mut by_account: HashMap<AccountNumber, Totals> = HashMap::new();
    for entry in entries
        .iter()
        .filter(|e| resolved.matches(e) && chart.contains(e.account))
    {
        matched += 1;
        let totals = by_account.entry(entry.account).or_default();
        totals.debit += entry.debit.wide();
        totals.credit += entry.credit.wide();
    }

    let mut rows: Vec<BalanceRow> = by_account
        .into_iter()
        .filter_map(|(account, totals)| {
            // Always present: membership was checked while filtering.
            let description = chart.label(account)?;
            Some(BalanceRow {
                account,
                description: description.to_string(),
                debit: totals.debit,
                credit: totals.credit,
                balance: totals.debit - totals.credit,
            })
        })
        .collect();
    rows.sort_unstable_by_key(|row| row.account);

    let total_debit: i128 = rows.iter().map(|row| row.debit).sum();
    let total_credit: i128 = rows.iter().map(|row| row.credit).sum();

    tracing::debug!(
        entries = entries.len(),
        accounts = chart.len(),
        matched,
        rows = rows.len(),
        "balance report computed"
    );

    Report {
        rows,
        total_debit,
        total_credit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(account: u32, period: NaiveDate, debit: i64, credit: i64) -> JournalEntry {
        JournalEntry::new(account, period, debit, credit).unwrap()
    }

    fn row(account: u32, description: &str, debit: i128, credit: i128) -> BalanceRow {
        BalanceRow {
            account: AccountNumber::new(account),
            description: description.to_string(),
            debit,
            credit,
            balance: debit - credit,
        }
    }

    fn cash_and_sales() -> (Vec<Account>, Vec<JournalEntry>) {
        let accounts = vec![Account::new(1, "Cash"), Account::new(2, "Sales")];
        let entries = vec![
            entry(1, date(2023, 1, 5), 100, 0),
            entry(2, date(2023, 1, 10), 0, 40),
        ];
        (accounts, entries)
    }

    #[test]
    fn unfiltered_report_lists_every_account() {
        let (accounts, entries) = cash_and_sales();

        let report = compute_balance(&entries, &accounts, &FilterCriteria::all());

        assert_eq!(report.rows, vec![row(1, "Cash", 100, 0), row(2, "Sales", 0, 40)]);
        assert_eq!(report.rows[1].balance, -40);
        assert_eq!(report.total_debit, 100);
        assert_eq!(report.total_credit, 40);
    }

    #[test]
    fn start_account_excludes_lower_accounts() {
        let (accounts, entries) = cash_and_sales();
        let criteria = FilterCriteria::all().with_accounts(Some(AccountNumber::new(2)), None);

        let report = compute_balance(&entries, &accounts, &criteria);

        assert_eq!(report.rows, vec![row(2, "Sales", 0, 40)]);
        assert_eq!(report.total_debit, 0);
        assert_eq!(report.total_credit, 40);
    }

    #[test]
    fn entries_of_unknown_accounts_are_dropped() {
        let (accounts, mut entries) = cash_and_sales();
        entries.push(entry(99, date(2023, 1, 7), 5_000, 7_000));

        let report = compute_balance(&entries, &accounts, &FilterCriteria::all());

        assert!(report.row(AccountNumber::new(99)).is_none());
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total_debit, 100);
        assert_eq!(report.total_credit, 40);
    }

    #[test]
    fn empty_journal_yields_empty_report() {
        let (accounts, _) = cash_and_sales();

        let report = compute_balance(&[], &accounts, &FilterCriteria::all());

        assert!(report.is_empty());
        assert_eq!(report, Report::default());
    }

    #[test]
    fn entries_of_same_account_and_period_are_summed_into_one_row() {
        let accounts = vec![Account::new(1, "Cash")];
        let entries = vec![
            entry(1, date(2023, 1, 5), 100, 10),
            entry(1, date(2023, 1, 5), 50, 20),
        ];

        let report = compute_balance(&entries, &accounts, &FilterCriteria::all());

        assert_eq!(report.rows, vec![row(1, "Cash", 150, 30)]);
        assert_eq!(report.rows[0].balance, 120);
    }

    #[test]
    fn period_bounds_are_inclusive() {
        let accounts = vec![Account::new(1, "Cash")];
        let entries = vec![
            entry(1, date(2022, 12, 31), 1, 0),
            entry(1, date(2023, 1, 1), 10, 0),
            entry(1, date(2023, 1, 31), 100, 0),
            entry(1, date(2023, 2, 1), 1_000, 0),
        ];
        let criteria =
            FilterCriteria::all().with_periods(Some(date(2023, 1, 1)), Some(date(2023, 1, 31)));

        let report = compute_balance(&entries, &accounts, &criteria);

        assert_eq!(report.rows, vec![row(1, "Cash", 110, 0)]);
    }

    #[test]
    fn inverted_account_range_matches_nothing() {
        let (accounts, entries) = cash_and_sales();
        let criteria = FilterCriteria::all()
            .with_accounts(Some(AccountNumber::new(2)), Some(AccountNumber::new(1)));

        let report = compute_balance(&entries, &accounts, &criteria);

        assert!(report.is_empty());
        assert_eq!(report.total_debit, 0);
        assert_eq!(report.total_credit, 0);
    }

    #[test]
    fn rows_sort_numerically_not_lexically() {
        let accounts = vec![
            Account::new(10, "Ten"),
            Account::new(9, "Nine"),
            Account::new(100, "Hundred"),
        ];
        let entries = vec![
            entry(100, date(2023, 1, 1), 1, 0),
            entry(10, date(2023, 1, 1), 1, 0),
            entry(9, date(2023, 1, 1), 1, 0),
        ];

        let report = compute_balance(&entries, &accounts, &FilterCriteria::all());

        let order: Vec<u32> = report.rows.iter().map(|r| r.account.get()).collect();
        assert_eq!(order, vec![9, 10, 100]);
    }

    #[test]
    fn row_lookup_finds_account() {
        let (accounts, entries) = cash_and_sales();
        let report = compute_balance(&entries, &accounts, &FilterCriteria::all());

        assert_eq!(report.row(AccountNumber::new(2)), Some(&row(2, "Sales", 0, 40)));
        assert_eq!(report.row(AccountNumber::new(3)), None);
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let accounts = vec![Account::new(1, "Cash")];
        let entries = vec![
            entry(1, date(2023, 1, 1), i64::MAX, 0),
            entry(1, date(2023, 1, 2), i64::MAX, 0),
        ];

        let report = compute_balance(&entries, &accounts, &FilterCriteria::all());

        assert_eq!(report.total_debit, 2 * i64::MAX as i128);
    }

    fn arb_accounts() -> impl Strategy<Value = Vec<Account>> {
        prop::collection::btree_set(0u32..40, 0..15).prop_map(|numbers| {
            numbers
                .into_iter()
                .map(|n| Account::new(n, format!("Account {n}")))
                .collect()
        })
    }

    fn arb_entries() -> impl Strategy<Value = Vec<JournalEntry>> {
        prop::collection::vec(
            (0u32..50, 0i64..730, 0i64..1_000_000, 0i64..1_000_000),
            0..60,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(account, day, debit, credit)| {
                    let period = date(2022, 1, 1) + chrono::Duration::days(day);
                    entry(account, period, debit, credit)
                })
                .collect()
        })
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            prop::option::of(0u32..50),
            prop::option::of(0u32..50),
            prop::option::of(0i64..730),
            prop::option::of(0i64..730),
        )
            .prop_map(|(sa, ea, sp, ep)| {
                let day = |d: i64| date(2022, 1, 1) + chrono::Duration::days(d);
                FilterCriteria::all()
                    .with_accounts(sa.map(AccountNumber::new), ea.map(AccountNumber::new))
                    .with_periods(sp.map(day), ep.map(day))
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: rows are strictly ascending, hence unique, and every row
        /// account belongs to the chart.
        #[test]
        fn rows_are_strictly_ascending_known_accounts(
            accounts in arb_accounts(),
            entries in arb_entries(),
            criteria in arb_criteria(),
        ) {
            let report = compute_balance(&entries, &accounts, &criteria);

            for pair in report.rows.windows(2) {
                prop_assert!(pair[0].account < pair[1].account);
            }
            for row in &report.rows {
                prop_assert!(accounts.iter().any(|a| a.number == row.account));
            }
        }

        /// Property: totals equal the column sums and each balance equals
        /// debit minus credit.
        #[test]
        fn totals_and_balances_are_consistent(
            accounts in arb_accounts(),
            entries in arb_entries(),
            criteria in arb_criteria(),
        ) {
            let report = compute_balance(&entries, &accounts, &criteria);

            let debit: i128 = report.rows.iter().map(|r| r.debit).sum();
            let credit: i128 = report.rows.iter().map(|r| r.credit).sum();
            prop_assert_eq!(report.total_debit, debit);
            prop_assert_eq!(report.total_credit, credit);
            for row in &report.rows {
                prop_assert_eq!(row.balance, row.debit - row.credit);
            }
        }

        /// Property: totals agree with summing the filtered entries directly.
        #[test]
        fn totals_match_direct_sum_over_matching_entries(
            accounts in arb_accounts(),
            entries in arb_entries(),
            criteria in arb_criteria(),
        ) {
            let report = compute_balance(&entries, &accounts, &criteria);
            let resolved = criteria.resolve();

            let matching = entries.iter().filter(|e| {
                resolved.matches(e) && accounts.iter().any(|a| a.number == e.account)
            });
            let (debit, credit) = matching.fold((0i128, 0i128), |(d, c), e| {
                (d + e.debit.wide(), c + e.credit.wide())
            });
            prop_assert_eq!(report.total_debit, debit);
            prop_assert_eq!(report.total_credit, credit);
        }

        /// Property: omitting a bound is the same as the widest bound on that side.
        #[test]
        fn omitted_bounds_equal_widest_bounds(
            accounts in arb_accounts(),
            entries in arb_entries(),
        ) {
            let open = compute_balance(&entries, &accounts, &FilterCriteria::all());
            let widest = FilterCriteria::all()
                .with_accounts(Some(AccountNumber::new(0)), Some(AccountNumber::new(u32::MAX)))
                .with_periods(Some(NaiveDate::MIN), Some(NaiveDate::MAX));

            prop_assert_eq!(open, compute_balance(&entries, &accounts, &widest));
        }

        /// Property: unknown accounts never reach the report, whatever the filter.
        #[test]
        fn unknown_accounts_never_appear(
            accounts in arb_accounts(),
            entries in arb_entries(),
            criteria in arb_criteria(),
        ) {
            let report = compute_balance(&entries, &accounts, &criteria);
            let known: Vec<_> = entries
                .iter()
                .filter(|e| accounts.iter().any(|a| a.number == e.account))
                .cloned()
                .collect();

            prop_assert_eq!(report, compute_balance(&known, &accounts, &criteria));
        }

        /// Property: same inputs, same report; entry order does not matter.
        #[test]
        fn computation_is_idempotent_and_order_independent(
            accounts in arb_accounts(),
            entries in arb_entries(),
            criteria in arb_criteria(),
        ) {
            let first = compute_balance(&entries, &accounts, &criteria);
            let second = compute_balance(&entries, &accounts, &criteria);
            prop_assert_eq!(&first, &second);

            let mut reversed = entries.clone();
            reversed.reverse();
            prop_assert_eq!(first, compute_balance(&reversed, &accounts, &criteria));
        }
    }
}
