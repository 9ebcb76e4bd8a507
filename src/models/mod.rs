//! Core data models for the Leave Scheduling Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breaks;
mod day;
mod result;

pub use breaks::Break;
pub use day::Day;
pub use result::{OptimizationResult, Stats};
