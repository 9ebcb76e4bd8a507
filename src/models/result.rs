//! Optimization result and aggregate statistics.
//!
//! This module contains the [`Stats`] and [`OptimizationResult`] types that
//! package the outcome of a full optimization run.

use serde::{Deserialize, Serialize};

use super::{Break, Day};

/// Aggregate counts summed over every scheduled break.
///
/// Purely derived data: `Stats` carries no state of its own and is rebuilt
/// from the break list by [`Stats::from_breaks`].
///
/// # Example
///
/// ```
/// use holiday_optimizer::models::Stats;
///
/// let stats = Stats::from_breaks(&[]);
/// assert_eq!(stats.total_days_off, 0);
/// assert_eq!(stats.total_paid_leave, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Total days off across all breaks.
    pub total_days_off: usize,
    /// Total paid-leave days consumed across all breaks.
    pub total_paid_leave: usize,
    /// Total public holidays falling inside breaks.
    pub total_public_holidays: usize,
    /// Total weekend days falling inside breaks.
    pub total_weekends: usize,
    /// Total company days off falling inside breaks.
    pub total_company_days: usize,
}

impl Stats {
    /// Sums per-break counts into aggregate statistics.
    pub fn from_breaks(breaks: &[Break]) -> Self {
        Self {
            total_days_off: breaks.iter().map(|b| b.total_days).sum(),
            total_paid_leave: breaks.iter().map(|b| b.pto_days).sum(),
            total_public_holidays: breaks.iter().map(|b| b.public_holidays).sum(),
            total_weekends: breaks.iter().map(|b| b.weekends).sum(),
            total_company_days: breaks.iter().map(|b| b.company_days).sum(),
        }
    }
}

/// The complete outcome of an optimization run.
///
/// Holds the calendar sequence after the engine recorded leave and break
/// membership on it, the breaks in creation order (optimizer-selected breaks
/// first, forced breaks appended), and the derived statistics. All entities
/// are created once per run; there is no persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// The calendar sequence with leave/break flags applied.
    pub days: Vec<Day>,
    /// Every scheduled break, in the order it was created.
    pub breaks: Vec<Break>,
    /// Aggregate statistics over all breaks.
    pub stats: Stats,
}
