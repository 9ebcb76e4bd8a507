//! Error types for the Leave Scheduling Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration.
//!
//! The optimization core itself never fails: degenerate inputs (zero budget,
//! empty calendars, `max_break < min_break`) produce empty results rather
//! than errors, so error handling is confined to the configuration layer.

use thiserror::Error;

/// The main error type for the Leave Scheduling Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use holiday_optimizer::error::EngineError;
///
/// let error = EngineError::PresetNotFound {
///     name: "atlantis".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown country preset: atlantis");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A preset file was not found at the specified path.
    #[error("Preset file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A preset file could not be parsed.
    #[error("Failed to parse preset file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested country preset does not exist in the library.
    #[error("Unknown country preset: {name}")]
    PresetNotFound {
        /// The preset key that was not found.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
