//! Service layer for Finsight
//!
//! The dashboard core lives in `period`, `filter` and `aggregate`: pure
//! functions over in-memory snapshots, called whenever a filter changes or
//! fresh data arrives. The remaining services derive budget, goal and
//! transfer figures the same way.

pub mod aggregate;
pub mod budget;
pub mod category;
pub mod filter;
pub mod goal;
pub mod period;
pub mod transfer;

pub use aggregate::{aggregate_by_currency, CurrencyBreakdown, CurrencyTotals};
pub use budget::{BudgetLevel, BudgetService, BudgetStatus};
pub use filter::filter_transactions;
pub use goal::{goal_progress, GoalProgress};
pub use period::{local_now, resolve_period_window};
pub use transfer::{preview_transfer, TransferPreview, TransferRequest};
