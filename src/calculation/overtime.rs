//! Overtime computation.
//!
//! Overtime is the part of an attendance exceeding the employee's contracted
//! hours per day, computed only when the company enables it.

/// Computes overtime hours for one attendance.
///
/// Returns `total_hours - hours_per_day` when overtime is enabled, the
/// employee has a work schedule, and the attendance exceeds it. Returns 0
/// otherwise.
///
/// # Examples
///
/// ```
/// use attendance_hour_type::calculation::compute_overtime;
///
/// assert_eq!(compute_overtime(9.0, Some(8.0), true), 1.0);
/// assert_eq!(compute_overtime(12.0, Some(8.0), true), 4.0);
///
/// // Disabled for the company
/// assert_eq!(compute_overtime(12.0, Some(8.0), false), 0.0);
///
/// // No work schedule
/// assert_eq!(compute_overtime(12.0, None, true), 0.0);
/// ```
pub fn compute_overtime(total_hours: f64, hours_per_day: Option<f64>, enabled: bool) -> f64 {
    match hours_per_day {
        Some(contracted) if enabled && total_hours > contracted => total_hours - contracted,
        _ => 0.0,
    }
}
