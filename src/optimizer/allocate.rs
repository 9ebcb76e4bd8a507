//! Leftover-budget allocation.
//!
//! After the selector runs, any unused leave budget is spent greedily in two
//! passes per iteration: extend existing breaks by one day each, then create
//! new breaks out of free, unclaimed stretches. The caller repeats the
//! passes until the budget is gone or an iteration makes no progress.

use crate::models::{Break, Day};

/// Extends existing breaks into the following day, one day per break.
///
/// For every break in creation order, the calendar day right after its
/// current end date is consumed when it exists, is not already claimed by a
/// break, and is not itself a weekend/holiday/company day. Consuming marks
/// the day, appends it to the break and updates the break's counters.
/// Returns the remaining budget; exhausting it stops the pass mid-way,
/// leaving later breaks unextended.
pub(crate) fn extend_breaks(days: &mut [Day], breaks: &mut [Break], mut remaining: usize) -> usize {
    for br in breaks.iter_mut() {
        if remaining == 0 {
            break;
        }

        let next_idx = match br.day_indices.last() {
            Some(&last) => last + 1,
            None => continue,
        };
        if next_idx >= days.len() {
            continue;
        }

        let next = &mut days[next_idx];
        if next.is_part_of_break || next.is_fixed_off() {
            continue;
        }

        next.is_part_of_break = true;
        next.is_pto = true;

        br.day_indices.push(next_idx);
        br.end_date = next.date;
        br.total_days += 1;
        br.pto_days += 1;
        remaining -= 1;
    }

    remaining
}

/// Creates new breaks from free, unclaimed stretches of the calendar.
///
/// Scans from the beginning, skipping days that are fixed off or already in
/// a break. Each run of consecutive free days is consumed one day at a time
/// (marking leave and break membership) until a claimed or fixed-off day is
/// hit or the budget runs out, then emitted as a forced break. Returns the
/// new breaks and the remaining budget.
pub(crate) fn create_forced_breaks(days: &mut [Day], mut remaining: usize) -> (Vec<Break>, usize) {
    let mut forced = Vec::new();
    let n = days.len();
    let mut i = 0;

    while i < n && remaining > 0 {
        if days[i].is_part_of_break || days[i].is_fixed_off() {
            i += 1;
            continue;
        }

        let run_start = i;
        while i < n && remaining > 0 && !days[i].is_part_of_break && !days[i].is_fixed_off() {
            days[i].is_part_of_break = true;
            days[i].is_pto = true;
            remaining -= 1;
            i += 1;
        }

        if i > run_start {
            forced.push(Break::from_day_range(days, run_start, i - 1));
        }

        i += 1;
    }

    (forced, remaining)
}
