//! Strongly-typed ID wrappers for all entity types
//!
//! The finance API hands out integer ids, but they reach us both as JSON
//! numbers and as strings (route parameters, select values). Every id is
//! normalized to an `i64` newtype at deserialization or parse time so that
//! `"3"` and `3` compare equal everywhere past the boundary.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire shapes an id can arrive in
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawId {
    fn into_i64(self) -> Result<i64, String> {
        match self {
            RawId::Int(n) => Ok(n),
            RawId::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
            RawId::Float(f) => Err(format!("id is not an integer in range: {}", f)),
            RawId::Text(s) => parse_id(&s).ok_or_else(|| format!("id is not numeric: {:?}", s)),
        }
    }
}

fn parse_id(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}

/// Error returned when a string is not a numeric id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError {
    pub entity: &'static str,
    pub input: String,
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} id: {:?}", self.entity, self.input)
    }
}

impl std::error::Error for IdParseError {}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $entity:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the underlying integer
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Parse an ID from a string, tolerating surrounding whitespace
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                parse_id(s).map(Self).ok_or_else(|| IdParseError {
                    entity: $entity,
                    input: s.to_string(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer)?
                    .into_i64()
                    .map(Self)
                    .map_err(de::Error::custom)
            }
        }
    };
}

define_id!(AccountId, "account");
define_id!(TransactionId, "transaction");
define_id!(CategoryId, "category");
define_id!(BudgetId, "budget");
define_id!(GoalId, "goal");
