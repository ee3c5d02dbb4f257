//! Financial goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::GoalId;
use super::money::Money;

/// A savings target with a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GoalId>,

    pub name: String,

    pub target_amount: Money,

    #[serde(default)]
    pub current_amount: Money,

    /// Deadline; older API responses call it `deadline`
    #[serde(alias = "deadline", deserialize_with = "deserialize_goal_date")]
    pub target_date: NaiveDate,
}

impl FinancialGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            target_amount,
            current_amount,
            target_date,
        }
    }

    /// Amount still missing, never negative
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

fn deserialize_goal_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    super::transaction::parse_transaction_date(&raw)
        .map(|dt| dt.date())
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized goal date: {:?}", raw)))
}
