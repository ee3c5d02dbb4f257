//! Reports module for Finsight
//!
//! Balance by currency, the filtered transaction list, and the budget and
//! goal overview.

pub mod balance;
pub mod budget_overview;
pub mod transactions;

pub use balance::BalanceReport;
pub use budget_overview::BudgetOverviewReport;
pub use transactions::TransactionListReport;
