//! Request types for the attendance hour-type API.
//!
//! This module defines the JSON request structures for the
//! `/attendance/compute` endpoint.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, PublicHoliday, Shift, ShiftInstant, Snapshot};

/// Request body for the `/attendance/compute` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// The employee the attendance belongs to.
    pub employee: EmployeeRequest,
    /// The attendance to classify.
    pub shift: ShiftRequest,
    /// Holidays to consider on top of the configured calendar.
    #[serde(default)]
    pub public_holidays: Vec<PublicHoliday>,
}

/// Employee information in a compute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// IANA zone the employee works in.
    pub timezone: Tz,
    /// Contracted hours per day, if the employee has a work schedule.
    #[serde(default)]
    pub hours_per_day: Option<f64>,
    /// Holiday region the employee belongs to.
    #[serde(default)]
    pub region: Option<String>,
}

/// Attendance information in a compute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Identifier for the attendance; generated when omitted.
    #[serde(default)]
    pub id: Option<String>,
    /// When the employee checked in.
    pub check_in: ShiftInstant,
    /// When the employee checked out.
    #[serde(default)]
    pub check_out: Option<ShiftInstant>,
    /// Base64 webcam picture taken at check-in.
    #[serde(default)]
    pub image_check_in: Option<String>,
    /// Base64 webcam picture taken at check-out.
    #[serde(default)]
    pub image_check_out: Option<String>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            timezone: req.timezone,
            hours_per_day: req.hours_per_day,
            region: req.region,
        }
    }
}

impl ShiftRequest {
    /// Converts into a domain shift for `employee_id`, validating snapshots.
    pub fn into_shift(self, employee_id: &str) -> crate::error::EngineResult<Shift> {
        let image_check_in = self
            .image_check_in
            .as_deref()
            .map(Snapshot::from_base64)
            .transpose()?;
        let image_check_out = self
            .image_check_out
            .as_deref()
            .map(Snapshot::from_base64)
            .transpose()?;

        Ok(Shift {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            employee_id: employee_id.to_string(),
            check_in: self.check_in,
            check_out: self.check_out,
            image_check_in,
            image_check_out,
        })
    }
}
