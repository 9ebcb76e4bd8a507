//! Preset loading functionality.
//!
//! This module provides the [`PresetLibrary`] type for accessing the built-in
//! country presets and for loading additional presets from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CountryPreset, PlannerConfig};

/// The built-in preset data shipped with the crate.
const BUILTIN_PRESETS: &str = include_str!("../../presets/builtin.yaml");

/// Provides access to country presets.
///
/// A `PresetLibrary` maps preset keys (e.g., `"germany"`) to
/// [`CountryPreset`] entries. The built-in library ships holiday sets for
/// Germany (Berlin) and India; additional presets can be merged in from
/// external YAML files.
///
/// # File Format
///
/// ```yaml
/// germany:
///   name: "Germany (Berlin)"
///   year: 2026
///   default_pto: 19
///   holidays:
///     - { date: "2026-01-01", name: "Neujahr" }
/// ```
///
/// # Example
///
/// ```
/// use holiday_optimizer::config::PresetLibrary;
///
/// let library = PresetLibrary::builtin().unwrap();
/// assert!(library.contains("germany"));
///
/// let config = library.get_preset("germany", Some(25), None).unwrap();
/// assert_eq!(config.number_of_days, 25);
/// assert_eq!(config.year, Some(2026));
/// ```
#[derive(Debug, Clone)]
pub struct PresetLibrary {
    presets: BTreeMap<String, CountryPreset>,
}

impl PresetLibrary {
    /// Loads the presets embedded in the crate.
    pub fn builtin() -> EngineResult<Self> {
        let presets = Self::parse(BUILTIN_PRESETS, "<builtin>")?;
        Ok(Self { presets })
    }

    /// Loads presets from a YAML file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be read
    /// and [`EngineError::ConfigParseError`] when it is not valid preset
    /// YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let presets = Self::parse(&content, &path_str)?;
        Ok(Self { presets })
    }

    /// Merges another library into this one, overwriting duplicate keys.
    pub fn merge(&mut self, other: PresetLibrary) {
        self.presets.extend(other.presets);
    }

    /// Returns the preset for the given key, if any.
    pub fn get(&self, key: &str) -> Option<&CountryPreset> {
        self.presets.get(key)
    }

    /// Whether a preset with the given key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.presets.contains_key(key)
    }

    /// Returns all available preset keys in sorted order.
    pub fn available(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }

    /// Builds a planner configuration from a preset.
    ///
    /// `custom_pto` and `custom_year` override the preset's default leave
    /// budget and year; the preset's holidays are filtered to the chosen
    /// year.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PresetNotFound`] when the key is unknown.
    pub fn get_preset(
        &self,
        key: &str,
        custom_pto: Option<usize>,
        custom_year: Option<i32>,
    ) -> EngineResult<PlannerConfig> {
        let preset = self.get(key).ok_or_else(|| EngineError::PresetNotFound {
            name: key.to_string(),
        })?;

        Ok(preset.to_config(custom_pto, custom_year))
    }

    fn parse(content: &str, origin: &str) -> EngineResult<BTreeMap<String, CountryPreset>> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }
}
