//! Shift model and related types.
//!
//! This module defines the [`Shift`] struct (one attendance record, from
//! check-in to check-out) and the [`ShiftInstant`] used for its timestamps.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::Snapshot;

/// A check-in or check-out timestamp.
///
/// Hosts hand over either a naive civil datetime, which is taken to already
/// be in the employee's local time, or an offset-aware instant, which is
/// converted into the employee's zone.
///
/// # Example
///
/// ```
/// use attendance_hour_type::models::ShiftInstant;
///
/// let naive: ShiftInstant = serde_json::from_str("\"2021-12-02T06:00:00\"").unwrap();
/// assert!(matches!(naive, ShiftInstant::Naive(_)));
///
/// let aware: ShiftInstant = serde_json::from_str("\"2021-12-02T23:30:00Z\"").unwrap();
/// assert!(matches!(aware, ShiftInstant::Aware(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShiftInstant {
    /// An instant with an explicit UTC offset.
    Aware(DateTime<FixedOffset>),
    /// A civil datetime with no zone attached.
    Naive(NaiveDateTime),
}

impl ShiftInstant {
    /// Resolves this timestamp in the given zone.
    ///
    /// Naive values are attached to `tz` as they are; aware values are
    /// converted.
    pub fn in_timezone(&self, tz: Tz) -> DateTime<Tz> {
        match self {
            ShiftInstant::Aware(dt) => dt.with_timezone(&tz),
            ShiftInstant::Naive(naive) => localize(*naive, tz),
        }
    }
}

impl From<NaiveDateTime> for ShiftInstant {
    fn from(value: NaiveDateTime) -> Self {
        ShiftInstant::Naive(value)
    }
}

impl From<DateTime<FixedOffset>> for ShiftInstant {
    fn from(value: DateTime<FixedOffset>) -> Self {
        ShiftInstant::Aware(value)
    }
}

/// Attaches `tz` to a civil datetime.
///
/// In a DST fold the later (standard time) instant wins. In a DST gap the
/// offset in force before the transition is used, so 02:30 on a spring-forward
/// night lands one hour past the gap.
pub fn localize(naive: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(_, later) => later,
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(naive - TimeDelta::days(1)));
            tz.from_utc_datetime(&(naive - before.fix()))
        }
    }
}

/// Represents one attendance record, from check-in to optional check-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee who checked in.
    pub employee_id: String,
    /// When the employee checked in.
    pub check_in: ShiftInstant,
    /// When the employee checked out; absent while the shift is ongoing.
    #[serde(default)]
    pub check_out: Option<ShiftInstant>,
    /// Webcam picture taken at check-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_check_in: Option<Snapshot>,
    /// Webcam picture taken at check-out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_check_out: Option<Snapshot>,
}

impl Shift {
    /// Creates an open shift with no snapshots.
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        check_in: impl Into<ShiftInstant>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            check_in: check_in.into(),
            check_out: None,
            image_check_in: None,
            image_check_out: None,
        }
    }

    /// Sets the check-out timestamp, builder style.
    pub fn with_check_out(mut self, check_out: impl Into<ShiftInstant>) -> Self {
        self.check_out = Some(check_out.into());
        self
    }

    /// Returns true while the employee has not checked out.
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }

    /// Elapsed hours between check-in and check-out, or 0 when still open.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_hour_type::models::Shift;
    /// use chrono::NaiveDateTime;
    ///
    /// let check_in = NaiveDateTime::parse_from_str("2021-12-02 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let check_out = NaiveDateTime::parse_from_str("2021-12-03 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let shift = Shift::new("att_001", "emp_001", check_in).with_check_out(check_out);
    ///
    /// assert_eq!(shift.worked_hours(chrono_tz::Europe::Paris), 9.0);
    /// ```
    pub fn worked_hours(&self, tz: Tz) -> f64 {
        match self.check_out {
            Some(check_out) => {
                duration_hours(check_out.in_timezone(tz) - self.check_in.in_timezone(tz))
            }
            None => 0.0,
        }
    }
}

/// Converts a duration to fractional hours, keeping sub-second precision.
pub(crate) fn duration_hours(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 3_600_000.0
}
