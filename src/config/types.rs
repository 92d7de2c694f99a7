//! Configuration types for attendance hour typing.
//!
//! This module contains the strongly-typed, company-scoped configuration
//! structures that are deserialized from YAML configuration files or built
//! by the host and passed into each computation.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default beginning of night work, in fractional hours.
pub const DEFAULT_NIGHT_START: f64 = 22.0;

/// Default end of night work, in fractional hours.
pub const DEFAULT_NIGHT_END: f64 = 6.0;

/// The night work window, in the employee's local civil time.
///
/// Both bounds are fractional hours (`22.5` is 22:30). The window must cross
/// midnight, so `end` is always smaller than `start`.
///
/// # Example
///
/// ```
/// use attendance_hour_type::config::NightWindow;
/// use chrono::NaiveTime;
///
/// let window = NightWindow { start: 21.5, end: 5.25 };
/// assert_eq!(window.start_time().unwrap(), NaiveTime::from_hms_opt(21, 30, 0).unwrap());
/// assert_eq!(window.end_time().unwrap(), NaiveTime::from_hms_opt(5, 15, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightWindow {
    /// Beginning of night work.
    #[serde(default = "default_night_start")]
    pub start: f64,
    /// End of night work.
    #[serde(default = "default_night_end")]
    pub end: f64,
}

fn default_night_start() -> f64 {
    DEFAULT_NIGHT_START
}

fn default_night_end() -> f64 {
    DEFAULT_NIGHT_END
}

impl Default for NightWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_NIGHT_START,
            end: DEFAULT_NIGHT_END,
        }
    }
}

impl NightWindow {
    /// Time of day night work begins.
    pub fn start_time(&self) -> EngineResult<NaiveTime> {
        fractional_hour_to_time(self.start, "night_window.start")
    }

    /// Time of day night work ends.
    pub fn end_time(&self) -> EngineResult<NaiveTime> {
        fractional_hour_to_time(self.end, "night_window.end")
    }

    /// Returns true when the window wraps past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Checks both bounds lie in `[0, 24)` and the window wraps past midnight.
    pub fn validate(&self) -> EngineResult<()> {
        self.start_time()?;
        self.end_time()?;
        if !self.crosses_midnight() {
            return Err(EngineError::InvalidConfig {
                field: "night_window".to_string(),
                message: format!(
                    "night work must start in the evening and end the next morning ({} to {})",
                    self.start, self.end
                ),
            });
        }
        Ok(())
    }
}

/// Converts fractional hours to a time of day, truncating to whole minutes.
fn fractional_hour_to_time(value: f64, field: &str) -> EngineResult<NaiveTime> {
    if !value.is_finite() || !(0.0..24.0).contains(&value) {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("{} is not an hour of the day in [0, 24)", value),
        });
    }
    let hour = value.trunc() as u32;
    let minute = (60.0 * (value - value.trunc())) as u32;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| EngineError::InvalidConfig {
        field: field.to_string(),
        message: format!("{} does not map to a valid time", value),
    })
}

/// Weighting multipliers applied to night and overtime hours for payroll.
///
/// A multiplier only takes effect when its flag is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingConfig {
    /// Allow weighting of nighttime hours.
    pub weight_night_enabled: bool,
    /// Allow weighting of overtime hours.
    pub weight_overtime_enabled: bool,
    /// Multiplier applied to nighttime hours.
    pub weight_night_multiplier: f64,
    /// Multiplier applied to overtime hours.
    pub weight_overtime_multiplier: f64,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            weight_night_enabled: false,
            weight_overtime_enabled: false,
            weight_night_multiplier: 1.0,
            weight_overtime_multiplier: 1.0,
        }
    }
}

/// Company-scoped configuration consumed by every computation.
///
/// # Example
///
/// ```
/// use attendance_hour_type::config::CompanyConfig;
///
/// let config: CompanyConfig = serde_yaml::from_str("overtime_enabled: true").unwrap();
/// assert!(config.overtime_enabled);
/// assert_eq!(config.night_window.start, 22.0);
/// assert_eq!(config.weighting.weight_night_multiplier, 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyConfig {
    /// The night work window.
    pub night_window: NightWindow,
    /// Weighting of night and overtime hours.
    pub weighting: WeightingConfig,
    /// Whether overtime is computed for this company.
    pub overtime_enabled: bool,
}

impl CompanyConfig {
    /// Validates every field that has a constrained range.
    pub fn validate(&self) -> EngineResult<()> {
        self.night_window.validate()?;
        for (field, value) in [
            (
                "weighting.weight_night_multiplier",
                self.weighting.weight_night_multiplier,
            ),
            (
                "weighting.weight_overtime_multiplier",
                self.weighting.weight_overtime_multiplier,
            ),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("{} is not a non-negative multiplier", value),
                });
            }
        }
        Ok(())
    }
}
