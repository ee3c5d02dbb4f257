//! CLI command handlers
//!
//! Bridges clap argument parsing with the report and service layers.

pub mod add;
pub mod filter;
pub mod report;
pub mod transfer;

pub use add::{handle_add_command, AddArgs};
pub use filter::{resolve_now, FilterArgs};
pub use report::{
    handle_balance_command, handle_budgets_command, handle_transactions_command, BalanceArgs,
    BudgetsArgs, TransactionsArgs,
};
pub use transfer::{handle_transfer_command, TransferArgs};
