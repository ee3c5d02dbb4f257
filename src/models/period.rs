//! Dashboard period representation
//!
//! A `PeriodSelector` is the symbolic filter the user picks (day, week,
//! month, year or a custom range). Resolving it against "now" yields a
//! concrete `PeriodWindow`; see `services::period`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The symbolic period tag, without custom bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    #[default]
    Month,
    Year,
    Custom,
}

impl PeriodKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" | "today" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for PeriodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown period: {}", s))
    }
}

/// A period filter as selected on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PeriodSelector {
    Day,
    Week,
    #[default]
    Month,
    Year,
    /// Custom range; either bound may still be unset
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl PeriodSelector {
    /// Build a selector from its tag; bounds only matter for `Custom`
    pub fn from_kind(kind: PeriodKind, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match kind {
            PeriodKind::Day => Self::Day,
            PeriodKind::Week => Self::Week,
            PeriodKind::Month => Self::Month,
            PeriodKind::Year => Self::Year,
            PeriodKind::Custom => Self::Custom { start, end },
        }
    }

    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Custom {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn kind(&self) -> PeriodKind {
        match self {
            Self::Day => PeriodKind::Day,
            Self::Week => PeriodKind::Week,
            Self::Month => PeriodKind::Month,
            Self::Year => PeriodKind::Year,
            Self::Custom { .. } => PeriodKind::Custom,
        }
    }
}

impl fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom {
                start: Some(start),
                end: Some(end),
            } => write!(f, "{} to {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d")),
            Self::Custom { .. } => write!(f, "custom (open range)"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// A concrete inclusive window in local time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PeriodWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Check whether a calendar day falls inside the window
    ///
    /// The day is compared as its midnight, so time-of-day never matters.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        let midnight = day.and_time(NaiveTime::MIN);
        midnight >= self.start && midnight <= self.end
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
