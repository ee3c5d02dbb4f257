//! Display formatting for terminal output

pub mod report;
pub mod transaction;

pub use report::{format_currency_lines, format_percentage, format_progress_bar, format_signed};
pub use transaction::{format_transaction_table, TransactionRow};
