//! Night/day hour splitting.
//!
//! This module splits the worked time of one attendance into the part that
//! falls inside the company's night window and the part that does not.
//!
//! The 24-hour period anchored at the attendance's local date can touch two
//! night windows: the tail of the night that began the evening before (it
//! ends at `local_date + end`) and the night starting that evening
//! (`local_date + start` to `local_date + 1 + end`). A third term catches
//! anything running past the start of the following night. Each term is an
//! overlap computed with min/max clamps, and the three are summed.

use std::cmp::{max, min};

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config::NightWindow;
use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftInstant, duration_hours, localize};

/// Longest attendance accepted, in hours.
pub const MAX_SHIFT_HOURS: f64 = 24.0;

/// The result of splitting an attendance into night and day hours.
///
/// # Example
///
/// ```
/// use attendance_hour_type::calculation::HourSplit;
///
/// let split = HourSplit::zero();
/// assert_eq!(split.total, 0.0);
/// assert!(!split.runs_into_next_night);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourSplit {
    /// Elapsed hours between check-in and check-out.
    pub total: f64,
    /// Hours inside the night window.
    pub night: f64,
    /// Hours outside the night window; always `total - night`.
    pub day: f64,
    /// Set when the check-out falls after the start of the following night.
    pub runs_into_next_night: bool,
}

impl HourSplit {
    /// The split of an attendance that has not been checked out.
    pub fn zero() -> Self {
        Self {
            total: 0.0,
            night: 0.0,
            day: 0.0,
            runs_into_next_night: false,
        }
    }
}

/// Splits an attendance into night and day hours.
///
/// # Arguments
///
/// * `check_in` - When the employee checked in
/// * `check_out` - When the employee checked out; `None` yields all zeros
/// * `timezone` - The employee's zone, used to resolve instants and anchors
/// * `local_date` - The attendance's payroll date (see [`super::local_date`])
/// * `night_window` - The company's night window
///
/// # Errors
///
/// - [`EngineError::InvalidShift`] if the check-out precedes the check-in
/// - [`EngineError::ShiftTooLong`] if more than 24 hours elapsed
/// - [`EngineError::InvalidConfig`] if a night window bound is out of range or
///   the window does not cross midnight
///
/// # Example
///
/// ```
/// use attendance_hour_type::calculation::split_hours;
/// use attendance_hour_type::config::NightWindow;
/// use attendance_hour_type::models::ShiftInstant;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let at = |s: &str| ShiftInstant::Naive(NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap());
///
/// // 21:00 to 06:00 against a 22:00-06:00 night window
/// let split = split_hours(
///     &at("2021-12-02 21:00"),
///     Some(&at("2021-12-03 06:00")),
///     chrono_tz::Europe::Paris,
///     NaiveDate::from_ymd_opt(2021, 12, 2).unwrap(),
///     &NightWindow::default(),
/// )
/// .unwrap();
///
/// assert_eq!(split.night, 8.0);
/// assert_eq!(split.day, 1.0);
/// ```
pub fn split_hours(
    check_in: &ShiftInstant,
    check_out: Option<&ShiftInstant>,
    timezone: Tz,
    local_date: NaiveDate,
    night_window: &NightWindow,
) -> EngineResult<HourSplit> {
    let Some(check_out) = check_out else {
        return Ok(HourSplit::zero());
    };

    let check_in = check_in.in_timezone(timezone);
    let check_out = check_out.in_timezone(timezone);

    let total = duration_hours(check_out - check_in);
    if total < 0.0 {
        return Err(EngineError::InvalidShift {
            shift_id: String::new(),
            message: format!("check-out {} is before check-in {}", check_out, check_in),
        });
    }
    if total > MAX_SHIFT_HOURS {
        return Err(EngineError::ShiftTooLong { hours: total });
    }

    night_window.validate()?;
    let start = night_window.start_time()?;
    let end = night_window.end_time()?;
    let next_date = local_date
        .succ_opt()
        .ok_or_else(|| EngineError::InvalidShift {
            shift_id: String::new(),
            message: format!("no calendar day follows {}", local_date),
        })?;

    let night0_start = anchor(local_date, start, timezone);
    let night0_end = anchor(local_date, end, timezone);
    let night1_start = anchor(next_date, start, timezone);
    let night1_end = anchor(next_date, end, timezone);

    // Tail of the previous night, up to this morning's end of night work.
    let mut night = clamp_hours(min(check_out, night0_end) - min(night0_end, check_in));

    // The night starting this evening.
    if check_out > night0_start {
        night += clamp_hours(min(check_out, night1_end) - max(check_in, night0_start));
    }

    // Anything past the start of the following night.
    night += clamp_hours(max(check_out, night1_start) - night1_start);

    let runs_into_next_night = check_out > night1_start;
    if runs_into_next_night {
        tracing::warn!(
            check_in = %check_in,
            check_out = %check_out,
            "Excessively long shift runs into the following night"
        );
    }

    Ok(HourSplit {
        total,
        night,
        day: total - night,
        runs_into_next_night,
    })
}

/// Combines a date and a time of day in the employee's zone.
fn anchor(date: NaiveDate, time: NaiveTime, timezone: Tz) -> DateTime<Tz> {
    localize(date.and_time(time), timezone)
}

fn clamp_hours(delta: TimeDelta) -> f64 {
    duration_hours(delta).max(0.0)
}
