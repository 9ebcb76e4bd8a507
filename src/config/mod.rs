//! Configuration for the Leave Scheduling Engine.
//!
//! This module contains the planner configuration types and the country
//! preset library loaded from YAML.

mod loader;
mod types;

pub use loader::PresetLibrary;
pub use types::{CountryPreset, HolidayDate, PlannerConfig};
