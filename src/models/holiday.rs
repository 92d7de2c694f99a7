//! Public holiday models and lookup.
//!
//! This module contains the [`HolidayLookup`] seam the date classifier calls
//! out to, and [`HolidayCalendar`], an in-memory implementation scoped by
//! region.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The region that applies to every employee.
pub const NATIONAL_REGION: &str = "national";

/// Answers whether a date is a public holiday for a given employee.
///
/// Implemented by [`HolidayCalendar`] and by any
/// `Fn(NaiveDate, &str) -> bool`, which lets hosts plug in their own
/// holiday store.
///
/// # Example
///
/// ```
/// use attendance_hour_type::models::HolidayLookup;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap();
/// let lookup = move |date: NaiveDate, _employee_id: &str| date == christmas;
/// assert!(lookup.is_public_holiday(christmas, "emp_001"));
/// ```
pub trait HolidayLookup {
    /// Returns true if `date` is a public holiday on `employee_id`'s calendar.
    fn is_public_holiday(&self, date: NaiveDate, employee_id: &str) -> bool;
}

impl<F> HolidayLookup for F
where
    F: Fn(NaiveDate, &str) -> bool,
{
    fn is_public_holiday(&self, date: NaiveDate, employee_id: &str) -> bool {
        self(date, employee_id)
    }
}

/// Represents a single public holiday.
///
/// # Example
///
/// ```
/// use attendance_hour_type::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2021, 11, 1).unwrap(),
///     name: "Toussaint".to_string(),
///     region: "national".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Toussaint").
    pub name: String,
    /// The region where this holiday applies; `national` applies everywhere.
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    NATIONAL_REGION.to_string()
}

/// In-memory public holiday calendar.
///
/// National holidays apply to every employee. Regional holidays apply only
/// to employees registered in that region.
///
/// # Example
///
/// ```
/// use attendance_hour_type::models::{HolidayCalendar, HolidayLookup, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let good_friday = NaiveDate::from_ymd_opt(2021, 4, 2).unwrap();
/// let calendar = HolidayCalendar::new(vec![PublicHoliday {
///     date: good_friday,
///     name: "Vendredi saint".to_string(),
///     region: "FR-ALSACE".to_string(),
/// }])
/// .with_employee_region("emp_strasbourg", "FR-ALSACE");
///
/// assert!(calendar.is_public_holiday(good_friday, "emp_strasbourg"));
/// assert!(!calendar.is_public_holiday(good_friday, "emp_paris"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// Known public holidays.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
    /// Region of each employee, keyed by employee ID.
    #[serde(default)]
    pub employee_regions: HashMap<String, String>,
}

impl HolidayCalendar {
    /// Creates a calendar with the given holidays and no regional employees.
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        Self {
            holidays,
            employee_regions: HashMap::new(),
        }
    }

    /// Registers the region of an employee.
    pub fn with_employee_region(
        mut self,
        employee_id: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        self.employee_regions
            .insert(employee_id.into(), region.into());
        self
    }

    /// Adds holidays to the calendar.
    pub fn extend(&mut self, holidays: impl IntoIterator<Item = PublicHoliday>) {
        self.holidays.extend(holidays);
    }

    /// Returns the holiday falling on `date` for `employee_id`, if any.
    pub fn holiday_on(&self, date: NaiveDate, employee_id: &str) -> Option<&PublicHoliday> {
        let region = self.employee_regions.get(employee_id);
        self.holidays.iter().find(|h| {
            h.date == date
                && (h.region == NATIONAL_REGION || region.is_some_and(|r| *r == h.region))
        })
    }
}

impl HolidayLookup for HolidayCalendar {
    fn is_public_holiday(&self, date: NaiveDate, employee_id: &str) -> bool {
        self.holiday_on(date, employee_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn toussaint() -> PublicHoliday {
        PublicHoliday {
            date: make_date("2021-11-01"),
            name: "Toussaint".to_string(),
            region: NATIONAL_REGION.to_string(),
        }
    }

    #[test]
    fn test_national_holiday_applies_to_everyone() {
        let calendar = HolidayCalendar::new(vec![toussaint()]);
        assert!(calendar.is_public_holiday(make_date("2021-11-01"), "emp_001"));
        assert!(calendar.is_public_holiday(make_date("2021-11-01"), "emp_002"));
    }

    #[test]
    fn test_non_holiday_date() {
        let calendar = HolidayCalendar::new(vec![toussaint()]);
        assert!(!calendar.is_public_holiday(make_date("2021-11-02"), "emp_001"));
    }

    #[test]
    fn test_regional_holiday_needs_matching_region() {
        let calendar = HolidayCalendar::new(vec![PublicHoliday {
            date: make_date("2021-12-26"),
            name: "Saint-Étienne".to_string(),
            region: "FR-ALSACE".to_string(),
        }])
        .with_employee_region("emp_alsace", "FR-ALSACE")
        .with_employee_region("emp_bretagne", "FR-BRETAGNE");

        assert!(calendar.is_public_holiday(make_date("2021-12-26"), "emp_alsace"));
        assert!(!calendar.is_public_holiday(make_date("2021-12-26"), "emp_bretagne"));
        assert!(!calendar.is_public_holiday(make_date("2021-12-26"), "emp_unknown"));
    }

    #[test]
    fn test_holiday_on_returns_name() {
        let calendar = HolidayCalendar::new(vec![toussaint()]);
        let holiday = calendar.holiday_on(make_date("2021-11-01"), "emp_001").unwrap();
        assert_eq!(holiday.name, "Toussaint");
    }

    #[test]
    fn test_extend_adds_holidays() {
        let mut calendar = HolidayCalendar::default();
        calendar.extend(vec![toussaint()]);
        assert_eq!(calendar.holidays.len(), 1);
    }

    #[test]
    fn test_deserialize_holiday_defaults_to_national() {
        let json = r#"{"date": "2021-11-01", "name": "Toussaint"}"#;
        let holiday: PublicHoliday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.region, "national");
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |date: NaiveDate, employee_id: &str| {
            employee_id == "emp_001" && date == make_date("2021-07-14")
        };
        assert!(lookup.is_public_holiday(make_date("2021-07-14"), "emp_001"));
        assert!(!lookup.is_public_holiday(make_date("2021-07-14"), "emp_002"));
    }
}
