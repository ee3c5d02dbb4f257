//! Property-based tests for filtering and currency aggregation.
//!
//! Every property runs against a fixed "now" so period windows are stable.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use finsight::models::{
    Account, AccountFilter, AccountId, Amount, Money, PeriodSelector, Selection, Transaction,
    TransactionType, TypeFilter,
};
use finsight::services::{aggregate_by_currency, filter_transactions};

const CURRENCIES: [&str; 3] = ["RUB", "USD", "EUR"];

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 20)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
}

// =============================================================================
// Generators
// =============================================================================

/// Accounts with ids 1..=n, each in one of the known currencies.
fn arb_accounts() -> impl Strategy<Value = Vec<Account>> {
    prop::collection::vec((0usize..CURRENCIES.len(), -50_000i64..500_000), 1..5).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (currency, balance))| {
                    Account::new(
                        i as i64 + 1,
                        format!("Account {}", i + 1),
                        Money::from_minor(balance),
                        CURRENCIES[currency],
                    )
                })
                .collect()
        },
    )
}

fn arb_type() -> impl Strategy<Value = TransactionType> {
    prop_oneof![Just(TransactionType::Income), Just(TransactionType::Expense)]
}

fn arb_amount() -> impl Strategy<Value = Amount> {
    prop_oneof![
        8 => (0i64..1_000_000).prop_map(|m| Amount::Valid(Money::from_minor(m))),
        1 => "[a-z]{1,5}".prop_map(Amount::Invalid),
    ]
}

/// Transactions spread over Dec 2023 to mid Feb 2024; account ids 5..=6 are
/// usually dangling.
fn arb_transactions() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        (arb_type(), arb_amount(), 1i64..7, 0i64..75, 0u32..24, 0u32..60),
        0..40,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (txn_type, amount, account, day, hour, minute))| {
                let date = base_date() + Duration::days(day);
                Transaction::new(i as i64 + 1, txn_type, amount, account, date)
                    .with_datetime(date.and_hms_opt(hour, minute, 0).unwrap())
            })
            .collect()
    })
}

fn arb_period() -> impl Strategy<Value = PeriodSelector> {
    let bound = proptest::option::of((0i64..75).prop_map(|d| base_date() + Duration::days(d)));
    prop_oneof![
        Just(PeriodSelector::Day),
        Just(PeriodSelector::Week),
        Just(PeriodSelector::Month),
        Just(PeriodSelector::Year),
        (bound.clone(), bound).prop_map(|(start, end)| PeriodSelector::Custom { start, end }),
    ]
}

fn arb_selection() -> impl Strategy<Value = Selection> {
    let account = prop_oneof![
        Just(AccountFilter::All),
        (1i64..7).prop_map(|id| AccountFilter::Only(AccountId::new(id))),
    ];
    let txn_type = prop_oneof![
        Just(TypeFilter::All),
        arb_type().prop_map(TypeFilter::Only),
    ];

    (account, txn_type, arb_period())
        .prop_map(|(account, txn_type, period)| Selection::new(account, txn_type, period))
}

fn currency_of<'a>(accounts: &'a [Account], id: AccountId) -> Option<&'a str> {
    accounts
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.currency.as_str())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn filter_never_invents_records(
        transactions in arb_transactions(),
        selection in arb_selection(),
    ) {
        let filtered = filter_transactions(&transactions, &selection, now());

        prop_assert!(filtered.len() <= transactions.len());
        for txn in &filtered {
            prop_assert!(transactions.contains(txn));
            prop_assert!(selection.account.matches(txn.account_id));
            prop_assert!(selection.txn_type.matches(txn.txn_type));
        }
    }

    #[test]
    fn filter_is_idempotent(
        transactions in arb_transactions(),
        selection in arb_selection(),
    ) {
        let once = filter_transactions(&transactions, &selection, now());
        let twice = filter_transactions(&once, &selection, now());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_orders_newest_first(
        transactions in arb_transactions(),
        selection in arb_selection(),
    ) {
        let filtered = filter_transactions(&transactions, &selection, now());
        for pair in filtered.windows(2) {
            prop_assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn income_and_expense_are_conserved_per_currency(
        accounts in arb_accounts(),
        transactions in arb_transactions(),
        selection in arb_selection(),
    ) {
        let selection = selection.with_account(AccountFilter::All);
        let filtered = filter_transactions(&transactions, &selection, now());
        let totals = aggregate_by_currency(&filtered, &accounts, AccountFilter::All);

        for currency in CURRENCIES {
            let expected = |txn_type: TransactionType| -> Money {
                filtered
                    .iter()
                    .filter(|t| t.txn_type == txn_type)
                    .filter(|t| currency_of(&accounts, t.account_id) == Some(currency))
                    .map(|t| t.amount.value_or_zero())
                    .sum()
            };

            prop_assert_eq!(
                totals.income.get(currency).unwrap_or_default(),
                expected(TransactionType::Income)
            );
            prop_assert_eq!(
                totals.expense.get(currency).unwrap_or_default(),
                expected(TransactionType::Expense)
            );
        }

        let balance_sum: Money = totals.balance.iter().map(|(_, m)| m).sum();
        let account_sum: Money = accounts.iter().map(|a| a.balance).sum();
        prop_assert_eq!(balance_sum, account_sum);
    }

    #[test]
    fn dangling_accounts_contribute_nothing(
        accounts in arb_accounts(),
        transactions in arb_transactions(),
        amount in 1i64..1_000_000,
        txn_type in arb_type(),
        scope in prop_oneof![
            Just(AccountFilter::All),
            Just(AccountFilter::Only(AccountId::new(99))),
        ],
    ) {
        let baseline = aggregate_by_currency(&transactions, &accounts, scope);

        let mut with_orphan = transactions.clone();
        with_orphan.push(Transaction::new(
            10_000,
            txn_type,
            Money::from_minor(amount),
            99,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        ));
        let totals = aggregate_by_currency(&with_orphan, &accounts, scope);

        prop_assert_eq!(totals.income, baseline.income);
        prop_assert_eq!(totals.expense, baseline.expense);
        prop_assert_eq!(totals.balance, baseline.balance);
    }
}
