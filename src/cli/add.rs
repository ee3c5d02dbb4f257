//! CLI command handler for new transactions
//!
//! Checks a transaction against the snapshot the way the entry form does and
//! prints the request that would be sent to the finance API.

use chrono::NaiveDateTime;
use clap::Args;

use crate::cli::filter::parse_date_arg;
use crate::display::format_signed;
use crate::error::{FinsightError, FinsightResult};
use crate::models::{AccountId, Category, CategoryId, Money, TransactionDraft, TransactionType};
use crate::services::category::find_by_name;
use crate::storage::Storage;

/// Arguments for `finsight add`
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Transaction type (income or expense)
    #[arg(value_name = "TYPE")]
    pub txn_type: String,

    /// Amount in major units
    pub amount: String,

    /// Transaction description
    pub description: String,

    /// Account ID
    #[arg(short, long)]
    pub account: String,

    /// Category ID or name
    #[arg(short, long)]
    pub category: String,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Handle the add command
pub fn handle_add_command(
    storage: &Storage,
    args: AddArgs,
    now: NaiveDateTime,
) -> FinsightResult<()> {
    let txn_type = TransactionType::parse(&args.txn_type).ok_or_else(|| {
        FinsightError::Validation(format!(
            "Invalid transaction type: '{}'. Use income or expense",
            args.txn_type
        ))
    })?;

    let amount = Money::parse(&args.amount).map_err(|e| {
        FinsightError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '100.00' or '100'. Error: {}",
            args.amount, e
        ))
    })?;

    let account_id =
        AccountId::parse(&args.account).map_err(|e| FinsightError::Validation(e.to_string()))?;
    let category_id = resolve_category_arg(&args.category, &storage.categories)?;

    let today = now.date();
    let date = match args.date.as_deref() {
        Some(raw) => parse_date_arg(raw)?,
        None => today,
    };

    let draft = TransactionDraft {
        txn_type,
        amount,
        description: args.description,
        account_id,
        category_id,
        date,
    };
    let category = draft.validate(&storage.accounts, &storage.categories, today)?;

    let (account_name, currency) = storage
        .accounts
        .iter()
        .find(|a| a.id == draft.account_id)
        .map(|a| (a.name.as_str(), a.currency.as_str()))
        .unwrap_or_default();

    println!("Transaction preview:");
    println!(
        "  Amount:   {}",
        format_signed(draft.amount, currency, draft.txn_type == TransactionType::Expense)
    );
    println!("  Account:  {}", account_name);
    println!("  Category: {}", category.name);
    println!("  Date:     {}", draft.date.format("%Y-%m-%d"));
    println!();
    println!("Request body:");
    println!(
        "{}",
        serde_json::to_string_pretty(&draft.request_body(category))?
    );

    Ok(())
}

/// Accept a category by id, falling back to an exact name match
fn resolve_category_arg(s: &str, categories: &[Category]) -> FinsightResult<CategoryId> {
    if let Ok(id) = CategoryId::parse(s) {
        return Ok(id);
    }
    find_by_name(categories, s.trim())
        .map(|c| c.id)
        .ok_or_else(|| FinsightError::category_not_found(s))
}
