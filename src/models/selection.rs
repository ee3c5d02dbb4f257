//! Dashboard filter selection
//!
//! Parsing a selection from strings is where `"3"` and `3` become the same
//! `AccountId`; past this point ids are compared as integers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ids::AccountId;
use super::period::PeriodSelector;
use super::transaction::TransactionType;
use crate::error::FinsightError;

/// Which accounts a view covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccountFilter {
    #[default]
    All,
    Only(AccountId),
}

impl AccountFilter {
    pub fn matches(&self, account_id: AccountId) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => *id == account_id,
        }
    }
}

impl FromStr for AccountFilter {
    type Err = FinsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        AccountId::parse(s)
            .map(Self::Only)
            .map_err(|e| FinsightError::Validation(e.to_string()))
    }
}

impl fmt::Display for AccountFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(id) => write!(f, "{}", id),
        }
    }
}

impl Serialize for AccountFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(AccountId),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Id(id) => Ok(Self::Only(id)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Which transaction types a view covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    pub fn matches(&self, txn_type: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Only(t) => *t == txn_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = FinsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TransactionType::parse(s)
            .map(Self::Only)
            .ok_or_else(|| FinsightError::Validation(format!("Unknown transaction type: {}", s)))
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(t) => write!(f, "{}", t),
        }
    }
}

impl Serialize for TypeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The complete set of dashboard filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub account: AccountFilter,
    pub txn_type: TypeFilter,
    pub period: PeriodSelector,
}

impl Selection {
    pub fn new(account: AccountFilter, txn_type: TypeFilter, period: PeriodSelector) -> Self {
        Self {
            account,
            txn_type,
            period,
        }
    }

    pub fn with_account(mut self, account: AccountFilter) -> Self {
        self.account = account;
        self
    }

    pub fn with_type(mut self, txn_type: TypeFilter) -> Self {
        self.txn_type = txn_type;
        self
    }

    pub fn with_period(mut self, period: PeriodSelector) -> Self {
        self.period = period;
        self
    }
}
