//! Error types for the attendance hour-type engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while classifying attendances.

use thiserror::Error;

/// The main error type for the attendance hour-type engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy for a host to turn any failure into a validation message.
///
/// # Example
///
/// ```
/// use attendance_hour_type::error::EngineError;
///
/// let error = EngineError::ShiftTooLong { hours: 25.0 };
/// assert_eq!(
///     error.to_string(),
///     "More than 24h of work in 1 shift is forbidden (25 hours recorded)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A single shift lasted longer than 24 hours.
    #[error("More than 24h of work in 1 shift is forbidden ({hours} hours recorded)")]
    ShiftTooLong {
        /// The elapsed hours between check-in and check-out.
        hours: f64,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A company configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A webcam snapshot was not valid base64 image data.
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot {
        /// A description of the decoding failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Attaches a shift ID to an `InvalidShift` raised without one.
    pub fn for_shift(self, id: &str) -> Self {
        match self {
            EngineError::InvalidShift { shift_id, message } if shift_id.is_empty() => {
                EngineError::InvalidShift {
                    shift_id: id.to_string(),
                    message,
                }
            }
            other => other,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
