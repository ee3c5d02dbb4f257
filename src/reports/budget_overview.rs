//! Budget Overview Report
//!
//! Budget usage for the current month or year alongside savings goal
//! progress.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::display::report::{
    double_separator, format_percentage, format_progress_bar, separator,
};
use crate::services::{goal_progress, BudgetLevel, BudgetService, BudgetStatus, GoalProgress};
use crate::storage::Storage;

/// Budget statuses and goal progress
#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverviewReport {
    pub budgets: Vec<BudgetStatus>,
    pub goals: Vec<GoalProgress>,
}

impl BudgetOverviewReport {
    /// Generate the overview from the loaded snapshot
    pub fn generate(storage: &Storage, warning_percent: u8, now: NaiveDateTime) -> Self {
        let service = BudgetService::new(&storage.categories, &storage.transactions, warning_percent);

        Self {
            budgets: service.statuses(&storage.budgets, now),
            goals: storage
                .goals
                .iter()
                .map(|g| goal_progress(g, now.date()))
                .collect(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Budgets\n");
        output.push_str(&double_separator(78));
        output.push('\n');

        if self.budgets.is_empty() {
            output.push_str("No budgets defined.\n");
        } else {
            output.push_str(&format!(
                "{:<20} {:>10} {:>12} {:>12} {:>6}  {}\n",
                "Category", "Period", "Limit", "Spent", "Used", "Status"
            ));
            output.push_str(&separator(78));
            output.push('\n');

            for status in &self.budgets {
                let marker = match status.level {
                    BudgetLevel::Ok => "",
                    BudgetLevel::Warning => "warning",
                    BudgetLevel::Exceeded => "EXCEEDED",
                };
                let category = if status.category_id.is_some() {
                    status.budget.category.clone()
                } else {
                    format!("{} (?)", status.budget.category)
                };

                output.push_str(&format!(
                    "{:<20} {:>10} {:>12} {:>12} {:>6}  {} {}\n",
                    category,
                    status.budget.period.to_string(),
                    status.budget.amount,
                    status.spent,
                    format_percentage(status.progress_percent),
                    format_progress_bar(status.progress_percent, 10),
                    marker
                ));
            }
        }

        output.push_str("\nGoals\n");
        output.push_str(&double_separator(78));
        output.push('\n');

        if self.goals.is_empty() {
            output.push_str("No goals defined.\n");
        } else {
            for progress in &self.goals {
                let goal = &progress.goal;
                output.push_str(&format!(
                    "{:<20} {} / {} {} {}\n",
                    goal.name,
                    goal.current_amount,
                    goal.target_amount,
                    format_progress_bar(progress.progress_percent, 10),
                    format_percentage(progress.progress_percent)
                ));

                if goal.is_reached() {
                    output.push_str("  Goal reached\n");
                } else {
                    output.push_str(&format!(
                        "  Due {} ({} months left), save {} per month\n",
                        goal.target_date.format("%Y-%m-%d"),
                        progress.months_remaining,
                        progress.monthly_contribution
                    ));
                }
            }
        }

        output
    }

    /// Count of budgets at or above their limit
    pub fn exceeded_count(&self) -> usize {
        self.budgets
            .iter()
            .filter(|s| s.level == BudgetLevel::Exceeded)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinsightPaths;
    use crate::models::{
        Budget, BudgetPeriod, Category, CategoryKind, FinancialGoal, Money, Transaction,
        TransactionType,
    };
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths);

        storage.categories = vec![
            Category::new(1, "Food", CategoryKind::Expense),
            Category::new(2, "Fun", CategoryKind::Expense),
        ];
        storage.transactions = vec![
            Transaction::new(1, TransactionType::Expense, Money::from_major(90), 1, date(2024, 3, 5))
                .with_category_id(1),
            Transaction::new(2, TransactionType::Expense, Money::from_major(20), 1, date(2024, 3, 6))
                .with_category_id(2),
        ];
        storage.budgets = vec![
            Budget::new("Food", Money::from_major(100), BudgetPeriod::Month),
            Budget::new("Fun", Money::from_major(10), BudgetPeriod::Month),
            Budget::new("Travel", Money::from_major(500), BudgetPeriod::Year),
        ];
        storage.goals = vec![FinancialGoal::new(
            "Laptop",
            Money::from_major(1000),
            Money::from_major(400),
            date(2024, 9, 20),
        )];

        (temp_dir, storage)
    }

    #[test]
    fn test_overview_levels() {
        let (_temp_dir, storage) = create_test_storage();
        let now = date(2024, 3, 20).and_hms_opt(9, 0, 0).unwrap();
        let report = BudgetOverviewReport::generate(&storage, 80, now);

        let levels: Vec<BudgetLevel> = report.budgets.iter().map(|s| s.level).collect();
        assert_eq!(
            levels,
            vec![BudgetLevel::Warning, BudgetLevel::Exceeded, BudgetLevel::Ok]
        );
        assert_eq!(report.exceeded_count(), 1);
        assert!(report.budgets[2].category_id.is_none());
    }

    #[test]
    fn test_overview_goals() {
        let (_temp_dir, storage) = create_test_storage();
        let now = date(2024, 3, 20).and_hms_opt(9, 0, 0).unwrap();
        let report = BudgetOverviewReport::generate(&storage, 80, now);

        let goal = &report.goals[0];
        assert_eq!(goal.months_remaining, 6);
        assert_eq!(goal.monthly_contribution, Money::from_major(100));

        let output = report.format_terminal();
        assert!(output.contains("Laptop"));
        assert!(output.contains("save 100.00 per month"));
        assert!(output.contains("EXCEEDED"));
        assert!(output.contains("Travel (?)"));
    }

    #[test]
    fn test_empty_overview() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(FinsightPaths::with_base_dir(temp_dir.path().to_path_buf()));
        let now = date(2024, 3, 20).and_hms_opt(9, 0, 0).unwrap();

        let output = BudgetOverviewReport::generate(&storage, 80, now).format_terminal();
        assert!(output.contains("No budgets defined."));
        assert!(output.contains("No goals defined."));
    }
}
