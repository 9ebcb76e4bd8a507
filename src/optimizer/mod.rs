//! The optimization engine.
//!
//! This module wires the pipeline together: candidate generation over the
//! calendar, Pareto pruning, the budget-constrained dynamic program that
//! selects breaks, and the greedy leftover-budget allocator. Data flows
//! strictly forward; the calendar's day flags are the only mutable state and
//! are written by exactly one stage at a time.

mod allocate;
mod candidate;
mod prune;
mod select;

pub use candidate::{Candidate, generate_candidates};
pub use prune::prune_candidates;
pub use select::select_breaks;

use tracing::{debug, info};

use crate::calendar::build_calendar;
use crate::config::PlannerConfig;
use crate::models::{Break, Day, OptimizationResult, Stats};

/// Parameters for one optimization run over a prebuilt calendar.
///
/// # Example
///
/// ```
/// use holiday_optimizer::optimizer::OptimizeParams;
///
/// let params = OptimizeParams::new(10);
/// assert_eq!(params.min_break, 4);
/// assert_eq!(params.max_break, 9);
/// assert_eq!(params.time_between_breaks, 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeParams {
    /// The paid-leave budget in days. A zero budget yields an empty result.
    pub number_of_days: usize,
    /// Minimum break length in days.
    pub min_break: usize,
    /// Maximum break length in days.
    pub max_break: usize,
    /// Minimum number of calendar days between two selected breaks.
    pub time_between_breaks: usize,
}

impl OptimizeParams {
    /// Creates parameters with the given budget and the engine defaults
    /// (minimum 4, maximum 9, 21 days between breaks).
    pub fn new(number_of_days: usize) -> Self {
        Self {
            number_of_days,
            min_break: 4,
            max_break: 9,
            time_between_breaks: 21,
        }
    }
}

impl From<&PlannerConfig> for OptimizeParams {
    fn from(config: &PlannerConfig) -> Self {
        Self {
            number_of_days: config.number_of_days,
            min_break: config.min_break,
            max_break: config.max_break,
            time_between_breaks: config.time_between_breaks,
        }
    }
}

/// Runs the full optimization pipeline over a prebuilt calendar.
///
/// The calendar is taken by value, mutated in place to record leave and
/// break membership, and handed back inside the result. Degenerate inputs
/// (empty calendar, zero budget, `max_break < min_break`) complete with
/// empty or partial outputs rather than failing.
pub fn optimize(mut days: Vec<Day>, params: &OptimizeParams) -> OptimizationResult {
    let candidates = generate_candidates(&days, params.min_break, params.max_break);
    let pruned = prune_candidates(candidates, params.number_of_days);
    debug!(surviving = pruned.len(), "pruned candidate ranges");

    let selected = select_breaks(&pruned, params.number_of_days, params.time_between_breaks);
    debug!(selected = selected.len(), "selected breaks");

    let mut breaks = apply_selection(&mut days, &selected);

    // Spend whatever the selector left over. The previous/current comparison
    // is the convergence guard: a full iteration that frees no budget means
    // no further allocation is possible.
    let mut remaining = remaining_budget(params.number_of_days, &breaks);
    let mut prev_remaining = remaining + 1;
    while remaining > 0 && remaining < prev_remaining {
        prev_remaining = remaining;

        let after_extend = allocate::extend_breaks(&mut days, &mut breaks, remaining);
        let (forced, _) = allocate::create_forced_breaks(&mut days, after_extend);
        breaks.extend(forced);

        remaining = remaining_budget(params.number_of_days, &breaks);
    }

    let stats = Stats::from_breaks(&breaks);
    info!(
        breaks = breaks.len(),
        days_off = stats.total_days_off,
        paid_leave = stats.total_paid_leave,
        "optimization complete"
    );

    OptimizationResult { days, breaks, stats }
}

/// Builds the calendar for a planner configuration and optimizes it.
///
/// This is the top-level entry point: calendar construction plus
/// [`optimize`] with the configuration's parameters.
///
/// # Example
///
/// ```
/// use holiday_optimizer::config::PlannerConfig;
/// use holiday_optimizer::optimizer::plan;
/// use chrono::NaiveDate;
///
/// let config = PlannerConfig {
///     year: Some(2026),
///     start_date: NaiveDate::from_ymd_opt(2026, 11, 1),
///     ..PlannerConfig::new(5)
/// };
/// let result = plan(&config);
/// assert_eq!(result.stats.total_paid_leave, 5);
/// ```
pub fn plan(config: &PlannerConfig) -> OptimizationResult {
    let days = build_calendar(config);
    debug!(window_days = days.len(), "built calendar window");
    optimize(days, &OptimizeParams::from(config))
}

/// Marks selected ranges on the calendar and finalizes them as breaks.
///
/// Every day in a selected range joins a break; days that are not already
/// fixed off become paid leave. The break's counts are then recomputed from
/// its day slice.
fn apply_selection(days: &mut [Day], selected: &[Candidate]) -> Vec<Break> {
    selected
        .iter()
        .map(|candidate| {
            for day in &mut days[candidate.start_idx..=candidate.end_idx] {
                day.is_part_of_break = true;
                if !day.is_fixed_off() {
                    day.is_pto = true;
                }
            }
            Break::from_day_range(days, candidate.start_idx, candidate.end_idx)
        })
        .collect()
}

fn remaining_budget(max_pto: usize, breaks: &[Break]) -> usize {
    let used: usize = breaks.iter().map(|b| b.pto_days).sum();
    max_pto.saturating_sub(used)
}
