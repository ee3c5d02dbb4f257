//! Transaction List Report
//!
//! The transactions page: the filtered list, newest first, with account and
//! category names resolved.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::io::Write;

use crate::display::transaction::{format_transaction_table, TransactionRow};
use crate::error::{FinsightError, FinsightResult};
use crate::models::Selection;
use crate::services::filter_transactions;
use crate::storage::Storage;

/// Filtered transaction list
#[derive(Debug, Clone, Serialize)]
pub struct TransactionListReport {
    /// Selected period as shown to the user
    pub period: String,
    /// Transactions matching the selection before any limit
    pub total_matching: usize,
    pub rows: Vec<TransactionRow>,
}

impl TransactionListReport {
    /// Generate the list; `limit` keeps only the newest entries
    pub fn generate(
        storage: &Storage,
        selection: &Selection,
        now: NaiveDateTime,
        limit: Option<usize>,
        date_format: &str,
    ) -> Self {
        let filtered = filter_transactions(&storage.transactions, selection, now);
        let total_matching = filtered.len();

        let rows = filtered
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|t| {
                TransactionRow::from_transaction(t, &storage.accounts, &storage.categories, date_format)
            })
            .collect();

        Self {
            period: selection.period.to_string(),
            total_matching,
            rows,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Transactions - {}\n", self.period));
        output.push_str(&format_transaction_table(&self.rows));

        if self.rows.len() < self.total_matching {
            output.push_str(&format!(
                "Showing {} of {} transactions\n",
                self.rows.len(),
                self.total_matching
            ));
        }

        output
    }

    /// Export the rows to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FinsightResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(writer);

        for row in &self.rows {
            csv_writer
                .serialize(row)
                .map_err(|e| FinsightError::Io(format!("Failed to write CSV row: {}", e)))?;
        }

        csv_writer
            .flush()
            .map_err(|e| FinsightError::Io(format!("Failed to flush CSV: {}", e)))
    }
}
