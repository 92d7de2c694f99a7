//! Check-in / check-out toggling with webcam snapshots.
//!
//! When an employee presses the attendance button, the kiosk captures a
//! webcam picture and the attendance flips: a check-in when no attendance is
//! open, a check-out otherwise. The picture lands on the matching side.

use chrono_tz::Tz;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, ShiftInstant, Snapshot};

use super::hour_split::MAX_SHIFT_HOURS;

/// Records an attendance action for an employee.
///
/// With no open attendance, opens a new one at `at` carrying `snapshot` as
/// its check-in picture. With an open attendance, closes it at `at` carrying
/// `snapshot` as its check-out picture.
///
/// # Errors
///
/// - [`EngineError::InvalidShift`] if the open attendance belongs to another
///   employee, or `at` is before its check-in
/// - [`EngineError::ShiftTooLong`] if closing it would exceed 24 hours
///
/// # Example
///
/// ```
/// use attendance_hour_type::calculation::record_attendance_action;
/// use attendance_hour_type::models::{ShiftInstant, Snapshot};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| -> ShiftInstant {
///     NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap().into()
/// };
/// let tz = chrono_tz::Europe::Paris;
/// let picture = Snapshot::from_bytes(b"jpeg bytes");
///
/// let opened = record_attendance_action(None, "emp_001", tz, at("2021-12-02 08:00"), Some(picture.clone())).unwrap();
/// assert!(opened.is_open());
/// assert_eq!(opened.image_check_in.as_ref(), Some(&picture));
///
/// let closed = record_attendance_action(Some(opened), "emp_001", tz, at("2021-12-02 16:00"), Some(picture.clone())).unwrap();
/// assert!(!closed.is_open());
/// assert_eq!(closed.image_check_out, Some(picture));
/// ```
pub fn record_attendance_action(
    open_shift: Option<Shift>,
    employee_id: &str,
    timezone: Tz,
    at: ShiftInstant,
    snapshot: Option<Snapshot>,
) -> EngineResult<Shift> {
    let Some(mut shift) = open_shift.filter(Shift::is_open) else {
        let shift = Shift {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            check_in: at,
            check_out: None,
            image_check_in: snapshot,
            image_check_out: None,
        };
        tracing::info!(
            shift_id = %shift.id,
            employee_id,
            with_snapshot = shift.image_check_in.is_some(),
            "Checked in"
        );
        return Ok(shift);
    };

    if shift.employee_id != employee_id {
        return Err(EngineError::InvalidShift {
            shift_id: shift.id,
            message: format!(
                "open attendance belongs to employee '{}', not '{}'",
                shift.employee_id, employee_id
            ),
        });
    }

    shift.check_out = Some(at);
    let hours = shift.worked_hours(timezone);
    if hours < 0.0 {
        return Err(EngineError::InvalidShift {
            shift_id: shift.id,
            message: "check-out is before check-in".to_string(),
        });
    }
    if hours > MAX_SHIFT_HOURS {
        return Err(EngineError::ShiftTooLong { hours });
    }
    shift.image_check_out = snapshot;

    tracing::info!(
        shift_id = %shift.id,
        employee_id,
        worked_hours = hours,
        with_snapshot = shift.image_check_out.is_some(),
        "Checked out"
    );
    Ok(shift)
}
