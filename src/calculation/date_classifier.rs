//! Payroll date derivation and classification.
//!
//! This module determines which calendar date an attendance belongs to from
//! the payroll point of view, and whether that date is an ordinary weekday,
//! a Sunday or a public holiday.

use chrono::{Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::{HolidayLookup, ShiftInstant};

/// Represents the type of date an attendance falls on.
///
/// # Example
///
/// ```
/// use attendance_hour_type::calculation::DateType;
///
/// assert_eq!(serde_json::to_string(&DateType::Holiday).unwrap(), "\"holiday\"");
/// assert_eq!(DateType::Normal.to_string(), "Weekday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateType {
    /// Any day that is neither a Sunday nor a public holiday.
    Normal,
    /// Sunday.
    Sunday,
    /// A public holiday on the employee's calendar.
    Holiday,
}

impl std::fmt::Display for DateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateType::Normal => write!(f, "Weekday"),
            DateType::Sunday => write!(f, "Sunday"),
            DateType::Holiday => write!(f, "Public Holiday"),
        }
    }
}

/// Returns the attendance date from the payroll point of view.
///
/// The check-in is resolved in the employee's zone (naive values are taken
/// as already local) and its civil date is returned.
///
/// # Example
///
/// ```
/// use attendance_hour_type::calculation::local_date;
/// use attendance_hour_type::models::ShiftInstant;
/// use chrono::NaiveDate;
///
/// // 23:30 UTC is already the next day in Paris
/// let check_in: ShiftInstant = serde_json::from_str("\"2021-12-02T23:30:00Z\"").unwrap();
/// assert_eq!(
///     local_date(&check_in, chrono_tz::Europe::Paris),
///     NaiveDate::from_ymd_opt(2021, 12, 3).unwrap()
/// );
/// ```
pub fn local_date(check_in: &ShiftInstant, timezone: Tz) -> NaiveDate {
    check_in.in_timezone(timezone).date_naive()
}

/// Classifies a payroll date.
///
/// Sunday takes precedence: a Sunday that is also a declared holiday is
/// classified [`DateType::Sunday`]. The holiday lookup is only consulted for
/// other days.
///
/// # Example
///
/// ```
/// use attendance_hour_type::calculation::{classify_date, DateType};
/// use chrono::NaiveDate;
///
/// let no_holidays = |_: NaiveDate, _: &str| false;
///
/// // 2021-12-05 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2021, 12, 5).unwrap();
/// assert_eq!(classify_date(sunday, "emp_001", &no_holidays), DateType::Sunday);
///
/// // 2021-12-02 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2021, 12, 2).unwrap();
/// assert_eq!(classify_date(thursday, "emp_001", &no_holidays), DateType::Normal);
/// ```
pub fn classify_date<H>(local_date: NaiveDate, employee_id: &str, holidays: &H) -> DateType
where
    H: HolidayLookup + ?Sized,
{
    if local_date.weekday() == Weekday::Sun {
        DateType::Sunday
    } else if holidays.is_public_holiday(local_date, employee_id) {
        DateType::Holiday
    } else {
        DateType::Normal
    }
}
