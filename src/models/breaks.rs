//! Break model.
//!
//! This module contains the [`Break`] type representing one contiguous
//! stretch of days off, either selected by the optimizer or forced by the
//! leftover-budget allocator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Day;

/// A contiguous stretch of days off within the planning window.
///
/// A break does not own its days: it stores the calendar indices of the days
/// it covers, so that flag mutations made through the calendar sequence stay
/// visible to every break referencing those days. The aggregate counts are
/// recomputed from the day slice when the break is created and maintained
/// incrementally when the break is extended.
///
/// Invariants: `total_days` equals the number of referenced days, and
/// `pto_days` equals the number of referenced days with `is_pto` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// The first date of the break (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the break (inclusive).
    pub end_date: NaiveDate,
    /// The total number of days in the break.
    pub total_days: usize,
    /// The number of paid-leave days the break consumes.
    pub pto_days: usize,
    /// The number of weekend days in the break.
    pub weekends: usize,
    /// The number of public holidays in the break.
    pub public_holidays: usize,
    /// The number of company days off in the break.
    pub company_days: usize,
    /// Calendar indices of the days covered, in date order.
    pub day_indices: Vec<usize>,
}

impl Break {
    /// Builds a break from an inclusive index range into the calendar.
    ///
    /// The aggregate counts are computed from the current day flags, so the
    /// engine marks `is_pto`/`is_part_of_break` on the range before calling
    /// this.
    pub fn from_day_range(days: &[Day], start_idx: usize, end_idx: usize) -> Self {
        let day_indices: Vec<usize> = (start_idx..=end_idx).collect();
        let slice = &days[start_idx..=end_idx];

        Self {
            start_date: slice[0].date,
            end_date: slice[slice.len() - 1].date,
            total_days: slice.len(),
            pto_days: slice.iter().filter(|d| d.is_pto).count(),
            weekends: slice.iter().filter(|d| d.is_weekend).count(),
            public_holidays: slice.iter().filter(|d| d.is_public_holiday).count(),
            company_days: slice.iter().filter(|d| d.is_company_day).count(),
            day_indices,
        }
    }

    /// Returns the dates within this break that are scheduled as paid leave.
    pub fn pto_dates(&self, days: &[Day]) -> Vec<NaiveDate> {
        self.day_indices
            .iter()
            .map(|&i| &days[i])
            .filter(|d| d.is_pto)
            .map(|d| d.date)
            .collect()
    }
}
