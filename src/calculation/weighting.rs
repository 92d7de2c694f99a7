//! Weighting of night and overtime hours.
//!
//! Payroll may count night and overtime hours at a premium. This module
//! applies the company's multipliers to the raw hour counts.

use serde::{Deserialize, Serialize};

use crate::config::WeightingConfig;

/// Night and overtime hours after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedHours {
    /// Night hours times the night multiplier (or unchanged).
    pub weighted_night: f64,
    /// Overtime hours times the overtime multiplier (or unchanged).
    pub weighted_overtime: f64,
}

/// Applies the weighting multipliers.
///
/// Each multiplier only applies when its flag is enabled; otherwise the
/// hours pass through unchanged.
///
/// # Example
///
/// ```
/// use attendance_hour_type::calculation::apply_weighting;
/// use attendance_hour_type::config::WeightingConfig;
///
/// let weighting = WeightingConfig {
///     weight_night_enabled: true,
///     weight_overtime_enabled: true,
///     weight_night_multiplier: 1.5,
///     weight_overtime_multiplier: 2.0,
/// };
///
/// let weighted = apply_weighting(8.0, 1.0, &weighting);
/// assert_eq!(weighted.weighted_night, 12.0);
/// assert_eq!(weighted.weighted_overtime, 2.0);
/// ```
pub fn apply_weighting(
    night_hours: f64,
    overtime_hours: f64,
    weighting: &WeightingConfig,
) -> WeightedHours {
    let night_factor = if weighting.weight_night_enabled {
        weighting.weight_night_multiplier
    } else {
        1.0
    };
    let overtime_factor = if weighting.weight_overtime_enabled {
        weighting.weight_overtime_multiplier
    } else {
        1.0
    };

    WeightedHours {
        weighted_night: night_hours * night_factor,
        weighted_overtime: overtime_hours * overtime_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighting(night: Option<f64>, overtime: Option<f64>) -> WeightingConfig {
        WeightingConfig {
            weight_night_enabled: night.is_some(),
            weight_overtime_enabled: overtime.is_some(),
            weight_night_multiplier: night.unwrap_or(3.0),
            weight_overtime_multiplier: overtime.unwrap_or(3.0),
        }
    }

    #[test]
    fn test_not_allowed_passes_hours_through() {
        let weighted = apply_weighting(8.0, 1.0, &weighting(None, None));
        assert_eq!(weighted.weighted_night, 8.0);
        assert_eq!(weighted.weighted_overtime, 1.0);
    }

    #[test]
    fn test_both_allowed() {
        let weighted = apply_weighting(8.0, 1.0, &weighting(Some(1.5), Some(2.0)));
        assert_eq!(weighted.weighted_night, 12.0);
        assert_eq!(weighted.weighted_overtime, 2.0);
    }

    #[test]
    fn test_only_night_allowed() {
        let weighted = apply_weighting(4.0, 2.0, &weighting(Some(1.25), None));
        assert_eq!(weighted.weighted_night, 5.0);
        assert_eq!(weighted.weighted_overtime, 2.0);
    }

    #[test]
    fn test_only_overtime_allowed() {
        let weighted = apply_weighting(4.0, 2.0, &weighting(None, Some(1.5)));
        assert_eq!(weighted.weighted_night, 4.0);
        assert_eq!(weighted.weighted_overtime, 3.0);
    }

    #[test]
    fn test_default_config_is_identity() {
        let weighted = apply_weighting(3.5, 0.75, &WeightingConfig::default());
        assert_eq!(weighted.weighted_night, 3.5);
        assert_eq!(weighted.weighted_overtime, 0.75);
    }

    #[test]
    fn test_zero_hours_stay_zero() {
        let weighted = apply_weighting(0.0, 0.0, &weighting(Some(1.5), Some(2.0)));
        assert_eq!(weighted.weighted_night, 0.0);
        assert_eq!(weighted.weighted_overtime, 0.0);
    }
}
