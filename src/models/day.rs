//! Calendar day model.
//!
//! This module contains the [`Day`] type, the single source of truth for the
//! state of one calendar date within the planning window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day within the planning window.
///
/// Exactly one `Day` exists per calendar date; it is owned by the calendar
/// sequence and referenced by index from every [`Break`](crate::models::Break)
/// that includes it, so a mutation made through the calendar is visible to
/// all breaks covering the day.
///
/// The `date`, `is_weekend`, `is_public_holiday` and `is_company_day` fields
/// are fixed at construction time. The `is_pto` and `is_part_of_break` flags
/// start out `false` and are set only by the optimization engine.
///
/// # Example
///
/// ```
/// use holiday_optimizer::models::Day;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let day = Day::new(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(), true, false, false);
/// assert!(day.is_fixed_off());
/// assert!(!day.is_pto);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// The calendar date of this day.
    pub date: NaiveDate,
    /// Whether the day falls on a Saturday or Sunday.
    pub is_weekend: bool,
    /// Whether the day is a public holiday.
    pub is_public_holiday: bool,
    /// Whether the day is a company-wide day off.
    pub is_company_day: bool,
    /// Whether the engine scheduled paid leave on this day.
    #[serde(default)]
    pub is_pto: bool,
    /// Whether this day belongs to a scheduled break.
    #[serde(default)]
    pub is_part_of_break: bool,
}

impl Day {
    /// Creates a new day with the engine-managed flags cleared.
    pub fn new(
        date: NaiveDate,
        is_weekend: bool,
        is_public_holiday: bool,
        is_company_day: bool,
    ) -> Self {
        Self {
            date,
            is_weekend,
            is_public_holiday,
            is_company_day,
            is_pto: false,
            is_part_of_break: false,
        }
    }

    /// Whether this day is already off without spending leave.
    ///
    /// Weekends, public holidays and company days cost no budget; the
    /// engine never marks them as paid leave.
    pub fn is_fixed_off(&self) -> bool {
        self.is_weekend || self.is_public_holiday || self.is_company_day
    }
}
