//! Account model
//!
//! Accounts are read-through copies of what the finance API returns. The
//! balance is the server's snapshot and is never recomputed from
//! transactions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Type of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Cash/wallet
    Cash,
    /// Debit or credit card
    Card,
    /// Savings account
    Savings,
}

impl AccountType {
    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "card" | "debit" | "credit" => Some(Self::Card),
            "savings" | "saving" => Some(Self::Savings),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Card => write!(f, "Card"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// A financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier within the user's scope
    pub id: AccountId,

    /// Account name (e.g., "Main card")
    pub name: String,

    /// Current balance as reported by the server
    pub balance: Money,

    /// ISO-4217-like currency code
    pub currency: String,

    /// Type of account, when the server reports one
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
}

impl Account {
    /// Create a new account
    pub fn new(
        id: impl Into<AccountId>,
        name: impl Into<String>,
        balance: Money,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            currency: currency.into(),
            account_type: None,
        }
    }

    /// Builder-style setter for the account type
    pub fn with_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.account_type {
            Some(t) => write!(f, "{} ({}, {})", self.name, t, self.currency),
            None => write!(f, "{} ({})", self.name, self.currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{"id": 1, "name": "Main", "balance": 100.5, "currency": "RUB", "type": "card"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, AccountId::new(1));
        assert_eq!(account.balance, Money::from_minor(10050));
        assert_eq!(account.account_type, Some(AccountType::Card));
    }

    #[test]
    fn test_type_is_optional_and_id_may_be_string() {
        let json = r#"{"id": "2", "name": "Wallet", "balance": 0, "currency": "USD"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, AccountId::new(2));
        assert_eq!(account.account_type, None);
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!(AccountType::parse("cash"), Some(AccountType::Cash));
        assert_eq!(AccountType::parse("CARD"), Some(AccountType::Card));
        assert_eq!(AccountType::parse("savings"), Some(AccountType::Savings));
        assert_eq!(AccountType::parse("investment"), None);
    }

    #[test]
    fn test_display() {
        let account = Account::new(1, "Main", Money::zero(), "RUB").with_type(AccountType::Card);
        assert_eq!(account.to_string(), "Main (Card, RUB)");
        let plain = Account::new(2, "Wallet", Money::zero(), "USD");
        assert_eq!(plain.to_string(), "Wallet (USD)");
    }
}
