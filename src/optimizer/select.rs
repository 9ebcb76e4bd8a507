//! Budget-constrained break selection.
//!
//! This module implements the core dynamic program: given the pruned
//! candidates sorted by start index, pick a non-overlapping, minimum-spaced
//! subset that maximizes total days off without exceeding the leave budget.
//! It is a budgeted variant of weighted interval scheduling with a minimum
//! gap between intervals instead of plain non-overlap.

use super::candidate::Candidate;

/// Finds the first candidate whose start index is at least `start_pos`.
///
/// Candidates are sorted by start index, so the predicate is monotonic and
/// plain binary search applies. Returns `candidates.len()` when none
/// qualifies.
fn first_candidate_at_or_after(candidates: &[Candidate], start_pos: usize) -> usize {
    candidates.partition_point(|c| c.start_idx < start_pos)
}

/// Selects the best budget-feasible, spacing-respecting subset of candidates.
///
/// `candidates` must be sorted by start index ascending (the pruner's output
/// order). For each candidate, `jump[idx]` is the first candidate that may
/// legally follow it, i.e. the first whose start index is at least
/// `end_idx + 1 + spacing`. The table is then filled bottom-up over
/// (candidate index, remaining budget):
///
/// ```text
/// dp[idx][p] = max(dp[idx + 1][p],                               // skip
///                  total_days + dp[jump[idx]][p - pto_used])     // take
/// ```
///
/// The comparison is strict, so on ties the skip branch wins; among
/// equal-value selections this keeps the one found later in the scan. That
/// tie-break is a fixed convention, not a uniqueness guarantee.
///
/// Returns the chosen candidates in start-index order. An empty candidate
/// list or a zero budget selects nothing.
pub fn select_breaks(candidates: &[Candidate], max_pto: usize, spacing: usize) -> Vec<Candidate> {
    if candidates.is_empty() || max_pto == 0 {
        return Vec::new();
    }

    let n = candidates.len();
    let jump: Vec<usize> = candidates
        .iter()
        .map(|c| first_candidate_at_or_after(candidates, c.end_idx + 1 + spacing))
        .collect();

    // Indexed arrays rather than memoized recursion: the O(n * budget)
    // bound stays explicit and deep calendars cannot overflow the stack.
    let mut dp_days = vec![vec![0usize; max_pto + 1]; n + 1];
    let mut dp_choice: Vec<Vec<Vec<usize>>> = vec![vec![Vec::new(); max_pto + 1]; n + 1];

    for idx in (0..n).rev() {
        let cost = candidates[idx].pto_used;
        let total_days = candidates[idx].total_days;
        let next = jump[idx];

        for p in 0..=max_pto {
            let mut best_days = dp_days[idx + 1][p];
            let mut best_choice = dp_choice[idx + 1][p].clone();

            if cost <= p {
                let take_days = total_days + dp_days[next][p - cost];
                if take_days > best_days {
                    best_days = take_days;
                    let mut take_choice = Vec::with_capacity(dp_choice[next][p - cost].len() + 1);
                    take_choice.push(idx);
                    take_choice.extend_from_slice(&dp_choice[next][p - cost]);
                    best_choice = take_choice;
                }
            }

            dp_days[idx][p] = best_days;
            dp_choice[idx][p] = best_choice;
        }
    }

    dp_choice[0][max_pto]
        .iter()
        .map(|&i| candidates[i].clone())
        .collect()
}
