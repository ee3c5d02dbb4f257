//! Transfer preview
//!
//! Validates a transfer between two accounts before it is submitted and
//! works out how much lands on the receiving side when currencies differ.
//! Balances themselves are only ever changed by the server.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Account, AccountId, Money};

/// Category name the API files transfers under
pub const TRANSFER_CATEGORY: &str = "Transfer";

/// A transfer as entered by the user
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Money,
    /// Units of the receiving currency per unit of the sending currency
    pub exchange_rate: Option<f64>,
    pub description: String,
}

/// A validated transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferPreview {
    pub from: Account,
    pub to: Account,
    /// Amount leaving the source account
    pub debit: Money,
    /// Amount arriving on the destination account
    pub credit: Money,
    /// Rate applied, only set for cross-currency transfers
    pub exchange_rate: Option<f64>,
    pub description: String,
}

/// Body of `POST /transactions/transfer`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRequestBody {
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub amount: Money,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
    pub date: String,
    #[serde(rename = "type")]
    pub txn_type: &'static str,
    pub category: &'static str,
}

impl TransferPreview {
    pub fn is_cross_currency(&self) -> bool {
        self.from.currency != self.to.currency
    }

    /// Whether the debit is larger than the source's current balance
    pub fn exceeds_balance(&self) -> bool {
        self.debit > self.from.balance
    }

    /// The request body the API expects, stamped with `at`
    pub fn request_body(&self, at: NaiveDateTime) -> TransferRequestBody {
        TransferRequestBody {
            from_account_id: self.from.id,
            to_account_id: self.to.id,
            amount: self.debit,
            description: self.description.clone(),
            exchange_rate: self.exchange_rate,
            date: at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            txn_type: "expense",
            category: TRANSFER_CATEGORY,
        }
    }
}

fn find_account(accounts: &[Account], id: AccountId) -> FinsightResult<&Account> {
    accounts
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| FinsightError::account_not_found(id.to_string()))
}

/// Validate a transfer and compute the credited amount
pub fn preview_transfer(
    request: &TransferRequest,
    accounts: &[Account],
) -> FinsightResult<TransferPreview> {
    if request.from == request.to {
        return Err(FinsightError::Transfer(
            "Source and destination accounts must differ".into(),
        ));
    }

    if !request.amount.is_positive() {
        return Err(FinsightError::Transfer(
            "Transfer amount must be greater than zero".into(),
        ));
    }

    let from = find_account(accounts, request.from)?;
    let to = find_account(accounts, request.to)?;

    let (credit, exchange_rate) = if from.currency == to.currency {
        (request.amount, None)
    } else {
        let rate = request.exchange_rate.ok_or_else(|| {
            FinsightError::Transfer(format!(
                "An exchange rate is required to transfer {} to {}",
                from.currency, to.currency
            ))
        })?;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(FinsightError::Transfer(format!(
                "Exchange rate must be a positive number, got {}",
                rate
            )));
        }
        let credit = request.amount.convert(rate).ok_or_else(|| {
            FinsightError::Transfer("Converted amount is out of range".into())
        })?;
        (credit, Some(rate))
    };

    tracing::debug!(
        from = %from.id,
        to = %to.id,
        debit = %request.amount,
        credit = %credit,
        "transfer preview"
    );

    Ok(TransferPreview {
        from: from.clone(),
        to: to.clone(),
        debit: request.amount,
        credit,
        exchange_rate,
        description: request.description.clone(),
    })
}
