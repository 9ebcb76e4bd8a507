//! Candidate break generation.
//!
//! This module enumerates every contiguous day range of allowed length that
//! would consume at least one paid-leave day. Ranges that are already fully
//! off (weekends bridged by holidays, for instance) are skipped: they cost
//! nothing and get absorbed naturally by neighboring leave-consuming breaks.

use serde::Serialize;

use crate::models::Day;

/// A provisional break under consideration by the selector.
///
/// Indices are inclusive positions into the calendar sequence. `pto_used`
/// counts the days in the range that are not weekend/holiday/company days;
/// generated candidates always have `pto_used >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Index of the first day of the range.
    pub start_idx: usize,
    /// Index of the last day of the range (inclusive).
    pub end_idx: usize,
    /// Length of the range in days.
    pub total_days: usize,
    /// Paid-leave days the range would consume.
    pub pto_used: usize,
    /// Days off gained per leave day spent (`total_days / pto_used`).
    pub efficiency: f64,
}

impl Candidate {
    fn from_range(days: &[Day], start_idx: usize, end_idx: usize) -> Option<Self> {
        let pto_used = days[start_idx..=end_idx]
            .iter()
            .filter(|d| !d.is_fixed_off())
            .count();
        if pto_used == 0 {
            return None;
        }

        let total_days = end_idx - start_idx + 1;
        Some(Self {
            start_idx,
            end_idx,
            total_days,
            pto_used,
            efficiency: total_days as f64 / pto_used as f64,
        })
    }
}

/// Enumerates all candidate ranges of length `min_len..=max_len`.
///
/// For every start index and every allowed length that fits in the calendar,
/// the range is emitted unless it needs no leave at all. Runs in
/// `O(n * (max_len - min_len + 1) * max_len)` with no side effects;
/// `max_len < min_len` simply yields no candidates.
pub fn generate_candidates(days: &[Day], min_len: usize, max_len: usize) -> Vec<Candidate> {
    let n = days.len();
    let min_len = min_len.max(1);
    let mut candidates = Vec::new();

    for start in 0..n {
        for len in min_len..=max_len.min(n.saturating_sub(start)) {
            if let Some(candidate) = Candidate::from_range(days, start, start + len - 1) {
                candidates.push(candidate);
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    /// Builds a calendar starting on Monday 2026-06-01 from a flag pattern:
    /// 'w' marks a weekend day, 'h' a holiday, 'c' a company day,
    /// '.' a plain workday.
    fn make_days(pattern: &str) -> Vec<Day> {
        let start = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        pattern
            .chars()
            .enumerate()
            .map(|(i, flag)| {
                Day::new(
                    start + Duration::days(i as i64),
                    flag == 'w',
                    flag == 'h',
                    flag == 'c',
                )
            })
            .collect()
    }

    #[test]
    fn test_all_candidates_use_at_least_one_leave_day() {
        let days = make_days("..ww...ww.....");
        let candidates = generate_candidates(&days, 4, 9);
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|c| c.pto_used >= 1));
    }

    #[test]
    fn test_total_days_matches_index_span() {
        let days = make_days("..ww...ww.....");
        for c in generate_candidates(&days, 4, 9) {
            assert_eq!(c.total_days, c.end_idx - c.start_idx + 1);
            assert!(c.total_days >= 4 && c.total_days <= 9);
        }
    }

    #[test]
    fn test_fully_free_range_is_skipped() {
        // Four fixed-off days in a row: the length-4 range over them would
        // cost nothing and must not be a candidate.
        let days = make_days("..whhw...");
        let candidates = generate_candidates(&days, 4, 4);
        assert!(
            !candidates
                .iter()
                .any(|c| c.start_idx == 2 && c.end_idx == 5)
        );
    }

    #[test]
    fn test_weekend_bridge_candidate() {
        // Thu+Fri leave before a weekend: 4 days off for 2 days of leave.
        let days = make_days("...ww..");
        let candidates = generate_candidates(&days, 4, 4);
        let bridge = candidates
            .iter()
            .find(|c| c.start_idx == 1 && c.end_idx == 4)
            .unwrap();
        assert_eq!(bridge.total_days, 4);
        assert_eq!(bridge.pto_used, 2);
        assert!((bridge.efficiency - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_candidate_count_for_uniform_workweek() {
        // 10 plain workdays, lengths 3..=5: starts 0..=7 for len 3,
        // 0..=6 for len 4, 0..=5 for len 5.
        let days = make_days("..........");
        let candidates = generate_candidates(&days, 3, 5);
        assert_eq!(candidates.len(), 8 + 7 + 6);
    }

    #[test]
    fn test_max_len_below_min_len_yields_nothing() {
        let days = make_days("..........");
        assert!(generate_candidates(&days, 5, 4).is_empty());
    }

    #[test]
    fn test_empty_calendar_yields_nothing() {
        assert!(generate_candidates(&[], 4, 9).is_empty());
    }

    #[test]
    fn test_min_len_zero_is_clamped_to_one() {
        let days = make_days("...");
        let candidates = generate_candidates(&days, 0, 1);
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.total_days == 1));
    }

    #[test]
    fn test_company_days_cost_no_leave() {
        let days = make_days(".cc.");
        let candidates = generate_candidates(&days, 4, 4);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].pto_used, 2);
    }
}
