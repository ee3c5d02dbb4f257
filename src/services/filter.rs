//! Transaction filtering
//!
//! Applies the dashboard selection (type, account, period) to an in-memory
//! transaction list and orders the result newest first.

use chrono::NaiveDateTime;

use super::period::resolve_period_window;
use crate::models::{Selection, Transaction};

/// Filter transactions by the selection, sorted by date descending
///
/// Pure: the input is not modified and nothing is invented. Transactions on
/// the same date keep their original relative order.
pub fn filter_transactions(
    transactions: &[Transaction],
    selection: &Selection,
    now: NaiveDateTime,
) -> Vec<Transaction> {
    let window = resolve_period_window(&selection.period, now);

    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|t| selection.txn_type.matches(t.txn_type))
        .filter(|t| selection.account.matches(t.account_id))
        .filter(|t| window.map_or(true, |w| w.contains_day(t.day())))
        .cloned()
        .collect();

    // sort_by is stable
    filtered.sort_by(|a, b| b.date.cmp(&a.date));

    tracing::debug!(
        total = transactions.len(),
        kept = filtered.len(),
        period = %selection.period,
        account = %selection.account,
        txn_type = %selection.txn_type,
        "filtered transactions"
    );

    filtered
}
