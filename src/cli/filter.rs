//! Shared selection flags
//!
//! Turns the `--account/--type/--period/--from/--to` flags into a
//! `Selection`, falling back to the saved settings for anything unset.

use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;

use crate::config::settings::Settings;
use crate::error::{FinsightError, FinsightResult};
use crate::models::transaction::parse_transaction_date;
use crate::models::{AccountFilter, PeriodKind, PeriodSelector, Selection, TypeFilter};
use crate::services::local_now;

/// Selection flags shared by the balance and transactions commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Account scope: "all" or an account ID
    #[arg(short, long)]
    pub account: Option<String>,

    /// Transaction type: all, income or expense
    #[arg(short = 't', long = "type")]
    pub txn_type: Option<String>,

    /// Period: day, week, month, year or custom
    #[arg(short, long)]
    pub period: Option<String>,

    /// Custom period start (YYYY-MM-DD); implies --period custom
    #[arg(long)]
    pub from: Option<String>,

    /// Custom period end (YYYY-MM-DD); implies --period custom
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Build the selection, using settings defaults for unset flags
    pub fn to_selection(&self, settings: &Settings) -> FinsightResult<Selection> {
        let account = match &self.account {
            Some(s) => s.parse::<AccountFilter>()?,
            None => settings.default_account,
        };

        let txn_type = match &self.txn_type {
            Some(s) => s.parse::<TypeFilter>()?,
            None => TypeFilter::All,
        };

        let start = self.from.as_deref().map(parse_date_arg).transpose()?;
        let end = self.to.as_deref().map(parse_date_arg).transpose()?;

        let kind = match &self.period {
            Some(s) => PeriodKind::parse(s).ok_or_else(|| {
                FinsightError::Validation(format!(
                    "Invalid period: '{}'. Use day, week, month, year or custom",
                    s
                ))
            })?,
            None if start.is_some() || end.is_some() => PeriodKind::Custom,
            None => settings.default_period,
        };

        if kind != PeriodKind::Custom && (start.is_some() || end.is_some()) {
            return Err(FinsightError::Validation(format!(
                "--from/--to only apply to a custom period, not '{}'",
                kind
            )));
        }

        Ok(Selection::new(
            account,
            txn_type,
            PeriodSelector::from_kind(kind, start, end),
        ))
    }
}

/// Parse a `YYYY-MM-DD` command-line date
pub fn parse_date_arg(s: &str) -> FinsightResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        FinsightError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// The moment periods are evaluated at: `as_of` if given, else the local clock
///
/// A bare date means the end of that day.
pub fn resolve_now(as_of: Option<&str>) -> FinsightResult<NaiveDateTime> {
    let Some(raw) = as_of else {
        return Ok(local_now());
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        return date
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| FinsightError::Validation(format!("Invalid date: '{}'", raw)));
    }

    parse_transaction_date(raw).ok_or_else(|| {
        FinsightError::Validation(format!(
            "Invalid --as-of value: '{}'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
            raw
        ))
    })
}
