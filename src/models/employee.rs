//! Employee model.
//!
//! Only the fields the hour-type computation reads are carried: the
//! employee's zone, contracted hours and holiday region.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Represents an employee whose attendances are classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// IANA zone the employee works in (e.g., "Europe/Paris").
    pub timezone: Tz,
    /// Contracted hours per day from the employee's work schedule, if any.
    #[serde(default)]
    pub hours_per_day: Option<f64>,
    /// Holiday region the employee belongs to (e.g., "FR-ALSACE").
    #[serde(default)]
    pub region: Option<String>,
}

impl Employee {
    /// Creates an employee with no work schedule and no region.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_hour_type::models::Employee;
    ///
    /// let employee = Employee::new("emp_001", chrono_tz::Europe::Paris).with_hours_per_day(8.0);
    /// assert_eq!(employee.hours_per_day, Some(8.0));
    /// ```
    pub fn new(id: impl Into<String>, timezone: Tz) -> Self {
        Self {
            id: id.into(),
            timezone,
            hours_per_day: None,
            region: None,
        }
    }

    /// Sets the contracted hours per day.
    pub fn with_hours_per_day(mut self, hours: f64) -> Self {
        self.hours_per_day = Some(hours);
        self
    }

    /// Sets the holiday region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}
