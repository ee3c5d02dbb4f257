//! Budget model
//!
//! A spending limit for one category over the current month or year. How
//! much has been spent is never stored; see `services::budget`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::period::PeriodSelector;

/// Window a budget limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Month,
    Year,
}

impl BudgetPeriod {
    /// The dashboard period selector covering the same window
    pub fn selector(&self) -> PeriodSelector {
        match self {
            Self::Month => PeriodSelector::Month,
            Self::Year => PeriodSelector::Year,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => write!(f, "per month"),
            Self::Year => write!(f, "per year"),
        }
    }
}

/// A category budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BudgetId>,

    /// Category name this budget applies to
    pub category: String,

    /// Spending limit
    pub amount: Money,

    #[serde(default)]
    pub period: BudgetPeriod,
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: Money, period: BudgetPeriod) -> Self {
        Self {
            id: None,
            category: category.into(),
            amount,
            period,
        }
    }
}
