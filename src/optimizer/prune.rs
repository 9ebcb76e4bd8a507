//! Pareto pruning of candidate breaks.
//!
//! Candidates that cannot fit the leave budget are dropped outright, and
//! within each start index only the Pareto-optimal options survive. This
//! bounds the selector's input size without losing any range worth picking.

use std::collections::BTreeMap;

use super::candidate::Candidate;

/// Prunes infeasible and dominated candidates.
///
/// First drops every candidate whose `pto_used` exceeds `max_pto`. The
/// remainder is grouped by start index; within a group, candidates are
/// sorted by (`pto_used` ascending, `total_days` descending) and a candidate
/// is dropped when an already-kept one in the same group covers at least as
/// far, costs no more leave and is at least as long. Candidates with
/// different start indices are never compared.
///
/// Survivors are returned sorted by start index ascending.
pub fn prune_candidates(candidates: Vec<Candidate>, max_pto: usize) -> Vec<Candidate> {
    let mut by_start: BTreeMap<usize, Vec<Candidate>> = BTreeMap::new();
    for candidate in candidates {
        if candidate.pto_used > max_pto {
            continue;
        }
        by_start.entry(candidate.start_idx).or_default().push(candidate);
    }

    let mut pruned = Vec::new();
    for (_, mut group) in by_start {
        group.sort_by(|a, b| {
            a.pto_used
                .cmp(&b.pto_used)
                .then(b.total_days.cmp(&a.total_days))
        });

        let mut kept: Vec<Candidate> = Vec::new();
        for candidate in group {
            let dominated = kept.iter().any(|b| {
                b.end_idx >= candidate.end_idx
                    && b.pto_used <= candidate.pto_used
                    && b.total_days >= candidate.total_days
            });
            if !dominated {
                kept.push(candidate);
            }
        }
        pruned.extend(kept);
    }

    pruned
}
