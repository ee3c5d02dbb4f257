//! Budget service
//!
//! Derives how much of each category budget has been spent in the current
//! month or year. Nothing here is stored; every figure is recomputed from
//! the transaction list.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::category::{find_by_name, resolve_category_id};
use super::period::resolve_period_window;
use crate::models::{Budget, Category, CategoryId, Money, Transaction};

/// How close a budget is to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Ok,
    Warning,
    Exceeded,
}

/// Computed state of one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub budget: Budget,
    /// `None` when the budget's category name matches no category
    pub category_id: Option<CategoryId>,
    pub spent: Money,
    /// Limit minus spent; negative once exceeded
    pub remaining: Money,
    /// Spent as a share of the limit, capped at 100
    pub progress_percent: f64,
    pub level: BudgetLevel,
}

/// Service computing budget statuses over a transaction snapshot
pub struct BudgetService<'a> {
    categories: &'a [Category],
    transactions: &'a [Transaction],
    warning_percent: u8,
}

impl<'a> BudgetService<'a> {
    pub fn new(
        categories: &'a [Category],
        transactions: &'a [Transaction],
        warning_percent: u8,
    ) -> Self {
        Self {
            categories,
            transactions,
            warning_percent,
        }
    }

    /// Sum of expenses in the budget's category within its current window
    pub fn spent(&self, budget: &Budget, now: NaiveDateTime) -> Money {
        let Some(category) = find_by_name(self.categories, &budget.category) else {
            tracing::debug!(category = %budget.category, "budget category not found");
            return Money::zero();
        };

        let window = resolve_period_window(&budget.period.selector(), now);

        self.transactions
            .iter()
            .filter(|t| t.is_expense())
            .filter(|t| resolve_category_id(t, self.categories) == Some(category.id))
            .filter(|t| window.map_or(true, |w| w.contains_day(t.day())))
            .map(|t| t.amount.value_or_zero())
            .sum()
    }

    /// Full status for one budget
    pub fn status(&self, budget: &Budget, now: NaiveDateTime) -> BudgetStatus {
        let category_id = find_by_name(self.categories, &budget.category).map(|c| c.id);
        let spent = self.spent(budget, now);

        let raw_percent = if budget.amount.is_positive() {
            spent.to_f64() / budget.amount.to_f64() * 100.0
        } else if spent.is_positive() {
            100.0
        } else {
            0.0
        };

        let level = if raw_percent >= 100.0 {
            BudgetLevel::Exceeded
        } else if raw_percent >= f64::from(self.warning_percent) {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Ok
        };

        BudgetStatus {
            budget: budget.clone(),
            category_id,
            spent,
            remaining: budget.amount - spent,
            progress_percent: raw_percent.min(100.0),
            level,
        }
    }

    /// Statuses for every budget, in input order
    pub fn statuses(&self, budgets: &[Budget], now: NaiveDateTime) -> Vec<BudgetStatus> {
        budgets.iter().map(|b| self.status(b, now)).collect()
    }
}
