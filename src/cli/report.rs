//! CLI commands for reports
//!
//! Balance, transaction list and budget overview.

use chrono::NaiveDateTime;
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::filter::FilterArgs;
use crate::config::settings::Settings;
use crate::error::{FinsightError, FinsightResult};
use crate::reports::{BalanceReport, BudgetOverviewReport, TransactionListReport};
use crate::storage::Storage;

/// Arguments for `finsight balance`
#[derive(Args, Debug, Clone)]
pub struct BalanceArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `finsight transactions`
#[derive(Args, Debug, Clone)]
pub struct TransactionsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Show only the newest N transactions
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print JSON instead of a table
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `finsight budgets`
#[derive(Args, Debug, Clone)]
pub struct BudgetsArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Handle the balance command
pub fn handle_balance_command(
    storage: &Storage,
    settings: &Settings,
    args: BalanceArgs,
    now: NaiveDateTime,
) -> FinsightResult<()> {
    let selection = args.filters.to_selection(settings)?;
    let report = BalanceReport::generate(storage, &selection, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle the transactions command
pub fn handle_transactions_command(
    storage: &Storage,
    settings: &Settings,
    args: TransactionsArgs,
    now: NaiveDateTime,
) -> FinsightResult<()> {
    let selection = args.filters.to_selection(settings)?;
    let report = TransactionListReport::generate(
        storage,
        &selection,
        now,
        args.limit,
        &settings.date_format,
    );

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            FinsightError::Io(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!(
            "Exported {} transactions to: {}",
            report.rows.len(),
            path.display()
        );
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle the budgets command
pub fn handle_budgets_command(
    storage: &Storage,
    settings: &Settings,
    args: BudgetsArgs,
    now: NaiveDateTime,
) -> FinsightResult<()> {
    let report = BudgetOverviewReport::generate(storage, settings.budget_warning_percent, now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.format_terminal());
        let exceeded = report.exceeded_count();
        if exceeded > 0 {
            println!();
            println!("{} budget(s) exceeded", exceeded);
        }
    }

    Ok(())
}
