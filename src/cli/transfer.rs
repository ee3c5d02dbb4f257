//! CLI command handler for account transfers
//!
//! Validates a transfer against the account snapshot and prints the request
//! that would be sent to the finance API.

use chrono::NaiveDateTime;
use clap::Args;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{AccountId, Money};
use crate::services::{preview_transfer, TransferRequest};
use crate::storage::Storage;

/// Arguments for `finsight transfer`
#[derive(Args, Debug, Clone)]
pub struct TransferArgs {
    /// Source account ID
    pub from: String,

    /// Destination account ID
    pub to: String,

    /// Amount to debit from the source account
    pub amount: String,

    /// Exchange rate from the source to the destination currency
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Transfer description
    #[arg(short, long, default_value = "Transfer")]
    pub description: String,
}

/// Handle the transfer command
pub fn handle_transfer_command(
    storage: &Storage,
    args: TransferArgs,
    now: NaiveDateTime,
) -> FinsightResult<()> {
    let from = parse_account_arg(&args.from)?;
    let to = parse_account_arg(&args.to)?;

    let amount = Money::parse(&args.amount).map_err(|e| {
        FinsightError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '100.00' or '100'. Error: {}",
            args.amount, e
        ))
    })?;

    let request = TransferRequest {
        from,
        to,
        amount,
        exchange_rate: args.rate,
        description: args.description,
    };

    let preview = preview_transfer(&request, &storage.accounts)?;

    println!("Transfer preview:");
    println!(
        "  From: {} (-{})",
        preview.from.name,
        preview.debit.format_with_currency(&preview.from.currency)
    );
    println!(
        "  To:   {} (+{})",
        preview.to.name,
        preview.credit.format_with_currency(&preview.to.currency)
    );
    if let Some(rate) = preview.exchange_rate {
        println!("  Rate: {}", rate);
    }
    if preview.exceeds_balance() {
        println!(
            "  Warning: amount exceeds the current balance of {}",
            preview.from.balance.format_with_currency(&preview.from.currency)
        );
    }
    println!();
    println!("Request body:");
    println!("{}", serde_json::to_string_pretty(&preview.request_body(now))?);

    Ok(())
}

fn parse_account_arg(s: &str) -> FinsightResult<AccountId> {
    AccountId::parse(s).map_err(|e| FinsightError::Validation(e.to_string()))
}
