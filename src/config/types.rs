//! Configuration types for leave planning.
//!
//! This module contains the strongly-typed configuration structures that
//! drive an optimization run. They can be built in code or deserialized
//! from YAML/JSON.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A dated entry in a holiday or company-day list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayDate {
    /// The date of the day off.
    pub date: NaiveDate,
    /// The human-readable name (e.g., "Tag der Arbeit").
    pub name: String,
}

/// Parameters for one optimization run.
///
/// Only the leave budget is required; break lengths and spacing fall back to
/// the engine defaults (minimum 4, maximum 9, 21 days between breaks).
///
/// # Example
///
/// ```
/// use holiday_optimizer::config::PlannerConfig;
///
/// let config = PlannerConfig::new(19);
/// assert_eq!(config.number_of_days, 19);
/// assert_eq!(config.min_break, 4);
/// assert_eq!(config.max_break, 9);
/// assert_eq!(config.time_between_breaks, 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// The paid-leave budget in days.
    pub number_of_days: usize,
    /// The planning year. Defaults to the current year when absent.
    #[serde(default)]
    pub year: Option<i32>,
    /// Optional explicit start of the planning window.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Minimum break length in days.
    #[serde(default = "default_min_break")]
    pub min_break: usize,
    /// Maximum break length in days.
    #[serde(default = "default_max_break")]
    pub max_break: usize,
    /// Minimum number of calendar days between two selected breaks.
    #[serde(default = "default_time_between_breaks")]
    pub time_between_breaks: usize,
    /// Public holidays within the planning year.
    #[serde(default)]
    pub holidays: Vec<HolidayDate>,
    /// Company-wide days off within the planning year.
    #[serde(default)]
    pub company_days_off: Vec<HolidayDate>,
}

fn default_min_break() -> usize {
    4
}

fn default_max_break() -> usize {
    9
}

fn default_time_between_breaks() -> usize {
    21
}

impl PlannerConfig {
    /// Creates a configuration with the given leave budget and engine
    /// defaults for everything else.
    pub fn new(number_of_days: usize) -> Self {
        Self {
            number_of_days,
            year: None,
            start_date: None,
            min_break: default_min_break(),
            max_break: default_max_break(),
            time_between_breaks: default_time_between_breaks(),
            holidays: Vec::new(),
            company_days_off: Vec::new(),
        }
    }
}

/// A country preset bundling a planning year, a default leave budget and the
/// public holidays of that country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryPreset {
    /// The display name of the preset (e.g., "Germany (Berlin)").
    pub name: String,
    /// The year the holiday list applies to.
    pub year: i32,
    /// The default paid-leave budget for this country.
    pub default_pto: usize,
    /// The public holidays of the preset year.
    pub holidays: Vec<HolidayDate>,
}

impl CountryPreset {
    /// Turns this preset into a ready-to-run planner configuration.
    ///
    /// `custom_pto` and `custom_year` override the preset's defaults; the
    /// holiday list is filtered to the chosen year so that overriding the
    /// year never smuggles stale holidays into the calendar.
    pub fn to_config(&self, custom_pto: Option<usize>, custom_year: Option<i32>) -> PlannerConfig {
        let year = custom_year.unwrap_or(self.year);
        let holidays = self
            .holidays
            .iter()
            .filter(|h| h.date.year() == year)
            .cloned()
            .collect();

        PlannerConfig {
            number_of_days: custom_pto.unwrap_or(self.default_pto),
            year: Some(year),
            holidays,
            ..PlannerConfig::new(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_preset() -> CountryPreset {
        CountryPreset {
            name: "Testland".to_string(),
            year: 2026,
            default_pto: 12,
            holidays: vec![
                HolidayDate {
                    date: make_date("2026-01-01"),
                    name: "New Year".to_string(),
                },
                HolidayDate {
                    date: make_date("2026-05-01"),
                    name: "Labour Day".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_new_applies_engine_defaults() {
        let config = PlannerConfig::new(10);
        assert_eq!(config.number_of_days, 10);
        assert_eq!(config.min_break, 4);
        assert_eq!(config.max_break, 9);
        assert_eq!(config.time_between_breaks, 21);
        assert!(config.year.is_none());
        assert!(config.start_date.is_none());
        assert!(config.holidays.is_empty());
    }

    #[test]
    fn test_deserialize_minimal_config_uses_defaults() {
        let json = r#"{ "number_of_days": 7 }"#;
        let config: PlannerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.number_of_days, 7);
        assert_eq!(config.min_break, 4);
        assert_eq!(config.max_break, 9);
        assert_eq!(config.time_between_breaks, 21);
        assert!(config.company_days_off.is_empty());
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{
            "number_of_days": 19,
            "year": 2026,
            "start_date": "2026-03-01",
            "min_break": 3,
            "max_break": 7,
            "time_between_breaks": 14,
            "holidays": [
                { "date": "2026-05-01", "name": "Tag der Arbeit" }
            ],
            "company_days_off": [
                { "date": "2026-12-24", "name": "Office closed" }
            ]
        }"#;
        let config: PlannerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.year, Some(2026));
        assert_eq!(config.start_date, Some(make_date("2026-03-01")));
        assert_eq!(config.min_break, 3);
        assert_eq!(config.max_break, 7);
        assert_eq!(config.time_between_breaks, 14);
        assert_eq!(config.holidays.len(), 1);
        assert_eq!(config.company_days_off[0].name, "Office closed");
    }

    #[test]
    fn test_preset_to_config_uses_preset_defaults() {
        let config = make_preset().to_config(None, None);
        assert_eq!(config.number_of_days, 12);
        assert_eq!(config.year, Some(2026));
        assert_eq!(config.holidays.len(), 2);
        assert!(config.company_days_off.is_empty());
    }

    #[test]
    fn test_preset_to_config_honors_overrides() {
        let config = make_preset().to_config(Some(25), None);
        assert_eq!(config.number_of_days, 25);
    }

    #[test]
    fn test_preset_to_config_filters_holidays_to_year() {
        let config = make_preset().to_config(None, Some(2027));
        assert_eq!(config.year, Some(2027));
        assert!(config.holidays.is_empty());
    }
}
