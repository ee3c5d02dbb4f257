//! Core data models for Finsight
//!
//! These are read-through copies of what the finance API owns: accounts,
//! categories, transactions, budgets and goals, plus the dashboard filter
//! selection applied to them.

pub mod account;
pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod selection;
pub mod transaction;

pub use account::{Account, AccountType};
pub use budget::{Budget, BudgetPeriod};
pub use category::{Category, CategoryKind};
pub use goal::FinancialGoal;
pub use ids::{AccountId, BudgetId, CategoryId, GoalId, TransactionId};
pub use money::{Amount, Money};
pub use period::{PeriodKind, PeriodSelector, PeriodWindow};
pub use selection::{AccountFilter, Selection, TypeFilter};
pub use transaction::{Transaction, TransactionDraft, TransactionRequestBody, TransactionType};
