//! Balance Report
//!
//! The dashboard balance block: account balances plus income and expense for
//! the selected period, all grouped by currency.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::display::report::{double_separator, format_currency_lines, separator};
use crate::models::{AccountFilter, PeriodWindow, Selection, TypeFilter};
use crate::services::{aggregate_by_currency, filter_transactions, resolve_period_window, CurrencyBreakdown};
use crate::storage::Storage;

/// Balance report for one selection
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    /// Account scope, `"all"` or an account id
    pub account: AccountFilter,
    /// Name of the scoped account when it exists
    pub account_name: Option<String>,
    pub transaction_type: TypeFilter,
    /// Selected period as shown to the user
    pub period: String,
    /// Resolved window, `None` when date filtering is disabled
    pub window: Option<String>,
    /// Number of transactions that passed the filter
    pub transaction_count: usize,
    #[serde(flatten)]
    pub totals: CurrencyBreakdown,
}

impl BalanceReport {
    /// Filter the snapshot and aggregate it by currency
    pub fn generate(storage: &Storage, selection: &Selection, now: NaiveDateTime) -> Self {
        let filtered = filter_transactions(&storage.transactions, selection, now);
        let totals = aggregate_by_currency(&filtered, &storage.accounts, selection.account);
        let window: Option<PeriodWindow> = resolve_period_window(&selection.period, now);

        let account_name = match selection.account {
            AccountFilter::All => None,
            AccountFilter::Only(id) => storage
                .accounts
                .iter()
                .find(|a| a.id == id)
                .map(|a| a.name.clone()),
        };

        Self {
            account: selection.account,
            account_name,
            transaction_type: selection.txn_type,
            period: selection.period.to_string(),
            window: window.map(|w| w.to_string()),
            transaction_count: filtered.len(),
            totals,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        let scope = match (&self.account, &self.account_name) {
            (AccountFilter::All, _) => "All accounts".to_string(),
            (AccountFilter::Only(_), Some(name)) => name.clone(),
            (AccountFilter::Only(id), None) => format!("Account #{} (unknown)", id),
        };

        output.push_str(&format!("Balance - {}\n", scope));
        output.push_str(&double_separator(40));
        output.push('\n');
        output.push_str(&format!("Period: {}", self.period));
        if let Some(window) = &self.window {
            output.push_str(&format!(" ({})", window));
        }
        output.push('\n');
        output.push_str(&format!(
            "Type: {}  Transactions: {}\n\n",
            self.transaction_type, self.transaction_count
        ));

        output.push_str("Balance\n");
        output.push_str(&format_currency_lines(
            &self.totals.balance,
            2,
            "No accounts",
        ));

        output.push_str("\nIncome\n");
        output.push_str(&format_currency_lines(
            &self.totals.income,
            2,
            "No income for the selected period",
        ));

        output.push_str("\nExpenses\n");
        output.push_str(&format_currency_lines(
            &self.totals.expense,
            2,
            "No expenses for the selected period",
        ));

        output.push_str(&separator(40));
        output.push('\n');

        output
    }
}
