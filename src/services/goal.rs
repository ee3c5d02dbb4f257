//! Goal progress service

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{FinancialGoal, Money};

/// Computed progress for one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal: FinancialGoal,
    /// Saved share of the target, capped at 100
    pub progress_percent: f64,
    pub months_remaining: u32,
    /// Suggested whole-unit contribution per month to reach the target
    pub monthly_contribution: Money,
}

/// Whole calendar months from `today` until `target`, never negative
///
/// A month only counts once its day-of-month has been reached, so
/// 2024-01-31 to 2024-02-29 is zero months.
pub fn months_between(today: NaiveDate, target: NaiveDate) -> u32 {
    if target <= today {
        return 0;
    }
    let mut months = (target.year() - today.year()) * 12 + target.month() as i32 - today.month() as i32;
    if target.day() < today.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Progress, remaining months and suggested monthly contribution
pub fn goal_progress(goal: &FinancialGoal, today: NaiveDate) -> GoalProgress {
    let progress_percent = if goal.target_amount.is_positive() {
        (goal.current_amount.to_f64() / goal.target_amount.to_f64() * 100.0).clamp(0.0, 100.0)
    } else {
        100.0
    };

    let months_remaining = months_between(today, goal.target_date);

    GoalProgress {
        goal: goal.clone(),
        progress_percent,
        months_remaining,
        monthly_contribution: goal.remaining().div_ceil_whole(months_remaining),
    }
}
