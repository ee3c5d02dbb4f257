//! Currency aggregation
//!
//! Reduces a filtered transaction list into per-currency balance, income and
//! expense totals. A transaction's currency is that of its owning account.
//! Malformed records (unknown account, unparsable amount) are skipped; the
//! aggregation itself never fails.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::models::{Account, AccountFilter, AccountId, Money, Transaction, TransactionType};

/// Per-currency sums, kept in the order each currency was first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyTotals {
    entries: Vec<(String, Money)>,
}

impl CurrencyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to a currency bucket, creating it if needed
    ///
    /// Returns `false` and leaves the bucket untouched when the sum would
    /// overflow.
    pub fn add(&mut self, currency: &str, amount: Money) -> bool {
        match self.entries.iter_mut().find(|(c, _)| c == currency) {
            Some((_, total)) => match total.checked_add(amount) {
                Some(sum) => {
                    *total = sum;
                    true
                }
                None => false,
            },
            None => {
                self.entries.push((currency.to_string(), amount));
                true
            }
        }
    }

    pub fn get(&self, currency: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|(c, _)| c == currency)
            .map(|(_, m)| *m)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.entries.iter().map(|(c, m)| (c.as_str(), *m))
    }

    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CurrencyTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (currency, total) in &self.entries {
            map.serialize_entry(currency, total)?;
        }
        map.end()
    }
}

/// Balance, income and expense totals for one selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrencyBreakdown {
    pub balance: CurrencyTotals,
    pub income: CurrencyTotals,
    pub expense: CurrencyTotals,
}

/// Aggregate filtered transactions and account balances by currency
///
/// For `AccountFilter::All` the balance is the sum of every account's stored
/// balance per currency, independent of the transaction filter. For a single
/// account it is that account's balance alone (empty if the account is not
/// in the list). Income and expense only count transactions inside the
/// scope whose account resolves and whose amount parses.
pub fn aggregate_by_currency(
    filtered: &[Transaction],
    accounts: &[Account],
    scope: AccountFilter,
) -> CurrencyBreakdown {
    let mut breakdown = CurrencyBreakdown::default();

    for account in accounts.iter().filter(|a| scope.matches(a.id)) {
        // first match wins if the list carries duplicate ids
        if matches!(scope, AccountFilter::Only(_)) && !breakdown.balance.is_empty() {
            continue;
        }
        if !breakdown.balance.add(&account.currency, account.balance) {
            tracing::debug!(
                account = %account.id,
                balance = %account.balance,
                "skipping account balance that overflows the currency total"
            );
        }
    }

    let mut currency_by_account: HashMap<AccountId, &str> = HashMap::with_capacity(accounts.len());
    for account in accounts {
        currency_by_account
            .entry(account.id)
            .or_insert(account.currency.as_str());
    }

    for txn in filtered.iter().filter(|t| scope.matches(t.account_id)) {
        let Some(currency) = currency_by_account.get(&txn.account_id) else {
            tracing::debug!(
                transaction = %txn.id,
                account = %txn.account_id,
                "skipping transaction with unknown account"
            );
            continue;
        };

        let Some(amount) = txn.amount.value() else {
            tracing::debug!(
                transaction = %txn.id,
                amount = %txn.amount,
                "skipping transaction with unparsable amount"
            );
            continue;
        };

        let bucket = match txn.txn_type {
            TransactionType::Income => &mut breakdown.income,
            TransactionType::Expense => &mut breakdown.expense,
        };
        if !bucket.add(currency, amount) {
            tracing::debug!(
                transaction = %txn.id,
                amount = %amount,
                "skipping transaction that overflows the currency total"
            );
        }
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn accounts() -> Vec<Account> {
        vec![
            Account::new(1, "Card", Money::from_major(100), "RUB"),
            Account::new(2, "Dollars", Money::from_major(40), "USD"),
            Account::new(3, "Cash", Money::from_major(25), "RUB"),
        ]
    }

    fn txn(id: i64, t: TransactionType, amount: i64, account: i64) -> Transaction {
        Transaction::new(id, t, Money::from_major(amount), account, day())
    }

    #[test]
    fn test_all_accounts_breakdown() {
        let txns = vec![
            txn(1, TransactionType::Income, 50, 1),
            txn(2, TransactionType::Income, 10, 2),
            txn(3, TransactionType::Expense, 5, 3),
            txn(4, TransactionType::Income, 7, 3),
        ];
        let result = aggregate_by_currency(&txns, &accounts(), AccountFilter::All);

        assert_eq!(result.balance.get("RUB"), Some(Money::from_major(125)));
        assert_eq!(result.balance.get("USD"), Some(Money::from_major(40)));
        assert_eq!(result.income.get("RUB"), Some(Money::from_major(57)));
        assert_eq!(result.income.get("USD"), Some(Money::from_major(10)));
        assert_eq!(result.expense.get("RUB"), Some(Money::from_major(5)));
        assert_eq!(result.expense.get("USD"), None);
    }

    #[test]
    fn test_currency_order_is_first_seen() {
        let txns = vec![
            txn(1, TransactionType::Income, 1, 2),
            txn(2, TransactionType::Income, 1, 1),
        ];
        let result = aggregate_by_currency(&txns, &accounts(), AccountFilter::All);

        assert_eq!(result.balance.currencies().collect::<Vec<_>>(), vec!["RUB", "USD"]);
        assert_eq!(result.income.currencies().collect::<Vec<_>>(), vec!["USD", "RUB"]);
    }

    #[test]
    fn test_single_account_scope() {
        let txns = vec![
            txn(1, TransactionType::Income, 50, 1),
            txn(2, TransactionType::Income, 10, 3),
            txn(3, TransactionType::Expense, 20, 1),
        ];
        let scope = AccountFilter::Only(AccountId::new(1));
        let result = aggregate_by_currency(&txns, &accounts(), scope);

        assert_eq!(result.balance.len(), 1);
        assert_eq!(result.balance.get("RUB"), Some(Money::from_major(100)));
        assert_eq!(result.income.get("RUB"), Some(Money::from_major(50)));
        assert_eq!(result.expense.get("RUB"), Some(Money::from_major(20)));
    }

    #[test]
    fn test_single_unknown_account_is_empty() {
        let txns = vec![txn(1, TransactionType::Income, 50, 99)];
        let scope = AccountFilter::Only(AccountId::new(99));
        let result = aggregate_by_currency(&txns, &accounts(), scope);
        assert_eq!(result, CurrencyBreakdown::default());
    }

    #[test]
    fn test_dangling_account_is_skipped() {
        let txns = vec![
            txn(1, TransactionType::Income, 50, 99),
            txn(2, TransactionType::Income, 5, 1),
        ];
        let result = aggregate_by_currency(&txns, &accounts(), AccountFilter::All);
        assert_eq!(result.income.len(), 1);
        assert_eq!(result.income.get("RUB"), Some(Money::from_major(5)));
    }

    #[test]
    fn test_invalid_amount_contributes_nothing() {
        let mut bad = txn(1, TransactionType::Expense, 0, 1);
        bad.amount = Amount::Invalid("abc".into());
        let result = aggregate_by_currency(&[bad], &accounts(), AccountFilter::All);
        assert!(result.expense.is_empty());
    }

    #[test]
    fn test_overflowing_amount_is_skipped() {
        let amount: Amount = serde_json::from_str("90000000000000000").unwrap();
        let mut first = txn(1, TransactionType::Income, 0, 1);
        first.amount = amount.clone();
        let mut second = txn(2, TransactionType::Income, 0, 1);
        second.amount = amount.clone();
        let small = txn(3, TransactionType::Income, 5, 1);

        let result = aggregate_by_currency(&[first, second, small], &accounts(), AccountFilter::All);

        let expected = amount.value().unwrap() + Money::from_major(5);
        assert_eq!(result.income.get("RUB"), Some(expected));
    }

    #[test]
    fn test_overflowing_balance_is_skipped() {
        let huge = Money::from_minor(i64::MAX - 10);
        let accounts = vec![
            Account::new(1, "Card", huge, "RUB"),
            Account::new(2, "Cash", Money::from_major(1), "RUB"),
        ];
        let result = aggregate_by_currency(&[], &accounts, AccountFilter::All);
        assert_eq!(result.balance.get("RUB"), Some(huge));
    }

    #[test]
    fn test_empty_inputs() {
        let result = aggregate_by_currency(&[], &[], AccountFilter::All);
        assert!(result.balance.is_empty());
        assert!(result.income.is_empty());
        assert!(result.expense.is_empty());
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let mut totals = CurrencyTotals::new();
        totals.add("USD", Money::from_minor(150));
        totals.add("EUR", Money::from_major(2));
        assert_eq!(serde_json::to_string(&totals).unwrap(), r#"{"USD":1.5,"EUR":2.0}"#);
    }
}
