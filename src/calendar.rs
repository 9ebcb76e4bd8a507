//! Calendar window construction.
//!
//! This module builds the ordered [`Day`] sequence that an optimization run
//! operates on: one record per calendar date from the window start through
//! December 31 of the planning year, each tagged as weekend, public holiday
//! or company day at construction time.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::config::PlannerConfig;
use crate::models::Day;

/// Whether a date falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use holiday_optimizer::calendar::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday, 2026-01-12 a Monday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Builds the calendar window for a planner configuration.
///
/// The window runs from the configured `start_date` through December 31 of
/// the planning year. Without an explicit start date, planning the current
/// year starts from today (past days carry no value), while planning any
/// other year starts from January 1.
///
/// A start date past the end of the year yields an empty calendar; the
/// engine treats that as a degenerate input, not an error.
pub fn build_calendar(config: &PlannerConfig) -> Vec<Day> {
    let today = Local::now().date_naive();
    let year = config.year.unwrap_or(today.year());

    let start = match config.start_date {
        Some(date) => date,
        // Jan 1 always exists for valid chrono years.
        None if year == today.year() => today,
        None => first_of_january(year),
    };
    let end = match NaiveDate::from_ymd_opt(year, 12, 31) {
        Some(date) => date,
        None => return Vec::new(),
    };

    let holidays: BTreeSet<NaiveDate> = config.holidays.iter().map(|h| h.date).collect();
    let company: BTreeSet<NaiveDate> = config.company_days_off.iter().map(|c| c.date).collect();

    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(Day::new(
            current,
            is_weekend(current),
            holidays.contains(&current),
            company.contains(&current),
        ));
        current += Duration::days(1);
    }

    days
}

fn first_of_january(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default()
}
