//! Transaction display formatting
//!
//! Renders filtered transactions as a terminal table.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::Write;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Account, Category, Transaction};
use crate::services::category::category_label;

/// One transaction flattened for display and export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct TransactionRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "type")]
    pub txn_type: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Currency")]
    pub currency: String,
    #[tabled(rename = "Account")]
    pub account: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

impl TransactionRow {
    /// Flatten a transaction, resolving its account and category names
    ///
    /// Amounts that failed to parse are shown as `?<raw>`; an unknown account
    /// is shown by id with no currency.
    pub fn from_transaction(
        txn: &Transaction,
        accounts: &[Account],
        categories: &[Category],
        date_format: &str,
    ) -> Self {
        let account = accounts.iter().find(|a| a.id == txn.account_id);

        let amount = if txn.is_expense() {
            match txn.amount.value() {
                Some(value) => (-value).to_string(),
                None => txn.amount.to_string(),
            }
        } else {
            txn.amount.to_string()
        };

        Self {
            id: txn.id.to_string(),
            date: format_date(&txn.date, date_format),
            txn_type: txn.txn_type.to_string(),
            amount,
            currency: account.map(|a| a.currency.clone()).unwrap_or_default(),
            account: account
                .map(|a| a.name.clone())
                .unwrap_or_else(|| format!("#{}", txn.account_id)),
            category: category_label(txn, categories),
            description: txn.description.clone().unwrap_or_default(),
        }
    }
}

/// Format a date with a user-supplied strftime pattern
///
/// An unusable pattern falls back to `%Y-%m-%d`.
pub fn format_date(date: &NaiveDateTime, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        tracing::warn!(format = date_format, "invalid date format, using %Y-%m-%d");
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Format rows as a table
pub fn format_transaction_table(rows: &[TransactionRow]) -> String {
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, CategoryKind, Money, TransactionType};
    use chrono::NaiveDate;

    fn fixtures() -> (Vec<Account>, Vec<Category>) {
        (
            vec![Account::new(1, "Card", Money::from_major(100), "RUB")],
            vec![Category::new(5, "Food", CategoryKind::Expense)],
        )
    }

    fn expense() -> Transaction {
        let mut txn = Transaction::new(
            3,
            TransactionType::Expense,
            Money::from_minor(1250),
            1,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
        .with_category_id(5);
        txn.description = Some("Lunch".into());
        txn
    }

    #[test]
    fn test_row_resolves_names() {
        let (accounts, categories) = fixtures();
        let row = TransactionRow::from_transaction(&expense(), &accounts, &categories, "%Y-%m-%d");

        assert_eq!(row.date, "2024-01-15");
        assert_eq!(row.amount, "-12.50");
        assert_eq!(row.currency, "RUB");
        assert_eq!(row.account, "Card");
        assert_eq!(row.category, "Food");
        assert_eq!(row.description, "Lunch");
    }

    #[test]
    fn test_row_with_unknown_account_and_invalid_amount() {
        let (_, categories) = fixtures();
        let mut txn = expense();
        txn.account_id = crate::models::AccountId::new(99);
        txn.amount = Amount::Invalid("abc".to_string());

        let row = TransactionRow::from_transaction(&txn, &[], &categories, "%d.%m.%Y");

        assert_eq!(row.date, "15.01.2024");
        assert_eq!(row.amount, "?abc");
        assert_eq!(row.account, "#99");
        assert!(row.currency.is_empty());
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let (accounts, categories) = fixtures();
        let row = TransactionRow::from_transaction(&expense(), &accounts, &categories, "%Q");
        assert_eq!(row.date, "2024-01-15");

        let date = expense().date;
        assert_eq!(format_date(&date, "%d/%m"), "15/01");
        assert_eq!(format_date(&date, "%Y-%"), "2024-01-15");
    }

    #[test]
    fn test_table_contains_headers_and_values() {
        let (accounts, categories) = fixtures();
        let rows = vec![TransactionRow::from_transaction(
            &expense(),
            &accounts,
            &categories,
            "%Y-%m-%d",
        )];

        let output = format_transaction_table(&rows);
        assert!(output.contains("Description"));
        assert!(output.contains("-12.50"));
        assert!(output.contains("Lunch"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_transaction_table(&[]), "No transactions found.\n");
    }
}
