//! Transaction model
//!
//! Amounts are non-negative; the sign is implied by the transaction type.
//! Dates carry a time-of-day for ordering, but period filtering only looks at
//! the calendar day.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::account::Account;
use super::category::Category;
use super::ids::{AccountId, CategoryId, TransactionId};
use super::money::{Amount, Money};
use crate::error::{FinsightError, FinsightResult};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A financial transaction as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub txn_type: TransactionType,

    /// Amount in major units; may be unparsable or absent
    #[serde(default = "Amount::missing")]
    pub amount: Amount,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Local date and time of the transaction
    #[serde(
        serialize_with = "serialize_datetime",
        deserialize_with = "deserialize_datetime"
    )]
    pub date: NaiveDateTime,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// Category reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    /// Denormalized category name, only consulted when `category_id` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Transaction {
    /// Create a transaction dated at midnight of `date`
    pub fn new(
        id: impl Into<TransactionId>,
        txn_type: TransactionType,
        amount: impl Into<Amount>,
        account_id: impl Into<AccountId>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            txn_type,
            amount: amount.into(),
            description: None,
            date: date.and_time(chrono::NaiveTime::MIN),
            account_id: account_id.into(),
            category_id: None,
            category: None,
        }
    }

    /// The calendar day used for period filtering
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    pub fn is_expense(&self) -> bool {
        self.txn_type == TransactionType::Expense
    }

    pub fn with_category_id(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_category_name(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }

    pub fn with_datetime(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }
}

/// Parse the date formats the API and form inputs produce
///
/// Plain dates and naive date-times are taken as local time. RFC 3339 values
/// carrying an offset are converted to local time first.
pub fn parse_transaction_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_time(chrono::NaiveTime::MIN));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local())
}

fn serialize_datetime<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn deserialize_datetime<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_transaction_date(&raw)
        .ok_or_else(|| de::Error::custom(format!("unrecognized transaction date: {:?}", raw)))
}

/// A transaction about to be submitted, checked the way the entry form does
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub txn_type: TransactionType,
    pub amount: Money,
    pub description: String,
    pub account_id: AccountId,
    pub category_id: CategoryId,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Validate against the current account and category lists
    ///
    /// Returns the draft's category on success.
    pub fn validate<'a>(
        &self,
        accounts: &[Account],
        categories: &'a [Category],
        today: NaiveDate,
    ) -> FinsightResult<&'a Category> {
        if !self.amount.is_positive() {
            return Err(FinsightError::Validation(
                "Amount must be greater than zero".into(),
            ));
        }

        if self.description.trim().is_empty() {
            return Err(FinsightError::Validation(
                "Description cannot be empty".into(),
            ));
        }

        if !accounts.iter().any(|a| a.id == self.account_id) {
            return Err(FinsightError::account_not_found(self.account_id.to_string()));
        }

        let category = categories
            .iter()
            .find(|c| c.id == self.category_id)
            .ok_or_else(|| FinsightError::category_not_found(self.category_id.to_string()))?;

        if !category.kind.accepts(self.txn_type) {
            return Err(FinsightError::Validation(format!(
                "Category '{}' is for {} transactions, not {}",
                category.name, category.kind, self.txn_type
            )));
        }

        if self.date > today {
            return Err(FinsightError::Validation(
                "Transactions cannot be dated in the future".into(),
            ));
        }

        Ok(category)
    }

    /// The create request the API expects, naming `category` as well as its id
    pub fn request_body(&self, category: &Category) -> TransactionRequestBody {
        TransactionRequestBody {
            amount: self.amount,
            txn_type: self.txn_type,
            category: category.name.clone(),
            category_id: category.id,
            description: self.description.trim().to_string(),
            date: self
                .date
                .and_time(chrono::NaiveTime::MIN)
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
            account_id: self.account_id,
        }
    }
}

/// JSON body for creating a transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRequestBody {
    pub amount: Money,
    #[serde(rename = "type")]
    pub txn_type: TransactionType,
    pub category: String,
    pub category_id: CategoryId,
    pub description: String,
    pub date: String,
    pub account_id: AccountId,
}
