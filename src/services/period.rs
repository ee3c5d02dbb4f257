//! Period resolution
//!
//! Turns a symbolic `PeriodSelector` plus "now" into the concrete inclusive
//! window the transaction filter compares against. All times are local.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{PeriodSelector, PeriodWindow};

/// Current local date and time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999 always exists on a naive date
    day.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(day))
}

/// Resolve a period selector to a concrete window
///
/// - `Day`: exactly today (`[today 00:00, today 00:00]`)
/// - `Week`: trailing seven days including today
/// - `Month` / `Year`: from the first day of the current month / year up to `now`
/// - `Custom`: `[start 00:00, end 23:59:59.999]`
///
/// Returns `None` when no date filtering should happen, which is the case for
/// a custom range with a missing bound.
pub fn resolve_period_window(period: &PeriodSelector, now: NaiveDateTime) -> Option<PeriodWindow> {
    let today = now.date();

    let window = match period {
        PeriodSelector::Day => PeriodWindow::new(start_of_day(today), start_of_day(today)),
        PeriodSelector::Week => {
            PeriodWindow::new(start_of_day(today - Duration::days(6)), end_of_day(today))
        }
        PeriodSelector::Month => {
            let first = today.with_day(1).unwrap_or(today);
            PeriodWindow::new(start_of_day(first), now)
        }
        PeriodSelector::Year => {
            let first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            PeriodWindow::new(start_of_day(first), now)
        }
        PeriodSelector::Custom {
            start: Some(start),
            end: Some(end),
        } => PeriodWindow::new(start_of_day(*start), end_of_day(*end)),
        PeriodSelector::Custom { .. } => return None,
    };

    Some(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_day_window_is_today_only() {
        let now = at(2024, 1, 20, 15, 0);
        let window = resolve_period_window(&PeriodSelector::Day, now).unwrap();

        assert_eq!(window.start, start_of_day(date(2024, 1, 20)));
        assert_eq!(window.end, start_of_day(date(2024, 1, 20)));
        assert!(window.contains_day(date(2024, 1, 20)));
        assert!(!window.contains_day(date(2024, 1, 19)));
        assert!(!window.contains_day(date(2024, 1, 21)));
    }

    #[test]
    fn test_week_window_is_trailing_seven_days() {
        let now = at(2024, 1, 20, 9, 0);
        let window = resolve_period_window(&PeriodSelector::Week, now).unwrap();

        assert!(window.contains_day(date(2024, 1, 14)));
        assert!(window.contains_day(date(2024, 1, 20)));
        assert!(!window.contains_day(date(2024, 1, 13)));
        assert!(!window.contains_day(date(2024, 1, 21)));
    }

    #[test]
    fn test_month_window_runs_until_now() {
        let now = at(2024, 3, 15, 12, 0);
        let window = resolve_period_window(&PeriodSelector::Month, now).unwrap();

        assert_eq!(window.start, start_of_day(date(2024, 3, 1)));
        assert_eq!(window.end, now);
        assert!(window.contains_day(date(2024, 3, 15)));
        assert!(!window.contains_day(date(2024, 2, 29)));
        assert!(!window.contains_day(date(2024, 3, 16)));
    }

    #[test]
    fn test_year_window() {
        let now = at(2024, 6, 1, 0, 0);
        let window = resolve_period_window(&PeriodSelector::Year, now).unwrap();

        assert_eq!(window.start, start_of_day(date(2024, 1, 1)));
        assert!(window.contains_day(date(2024, 1, 1)));
        assert!(window.contains_day(date(2024, 6, 1)));
        assert!(!window.contains_day(date(2023, 12, 31)));
    }

    #[test]
    fn test_custom_window_includes_both_ends() {
        let now = at(2024, 6, 1, 0, 0);
        let period = PeriodSelector::custom(date(2024, 2, 1), date(2024, 2, 10));
        let window = resolve_period_window(&period, now).unwrap();

        assert!(window.contains_day(date(2024, 2, 1)));
        assert!(window.contains_day(date(2024, 2, 10)));
        assert!(!window.contains_day(date(2024, 2, 11)));
        assert_eq!(window.end, date(2024, 2, 10).and_hms_milli_opt(23, 59, 59, 999).unwrap());
    }

    #[test]
    fn test_incomplete_custom_range_passes_through() {
        let now = at(2024, 6, 1, 0, 0);
        let open_end = PeriodSelector::Custom {
            start: Some(date(2024, 1, 1)),
            end: None,
        };
        let open = PeriodSelector::Custom {
            start: None,
            end: None,
        };
        assert_eq!(resolve_period_window(&open_end, now), None);
        assert_eq!(resolve_period_window(&open, now), None);
    }
}
