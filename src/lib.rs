//! Finsight - transaction aggregation and filtering for personal finance
//!
//! This library turns a snapshot of accounts and transactions from a
//! personal-finance API into dashboard views: transactions filtered by
//! account, type and period, and income, expense and balance totals grouped
//! by currency.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, selections, etc.)
//! - `storage`: JSON snapshot storage
//! - `services`: Period resolution, filtering, aggregation, budgets, goals
//! - `reports`: Balance, transaction list and budget overview reports
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `finsight` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finsight::models::Selection;
//! use finsight::services::{aggregate_by_currency, filter_transactions, local_now};
//!
//! let filtered = filter_transactions(&transactions, &Selection::default(), local_now());
//! let totals = aggregate_by_currency(&filtered, &accounts, Selection::default().account);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinsightError, FinsightResult};
