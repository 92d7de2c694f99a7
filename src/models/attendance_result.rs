//! Attendance result models.
//!
//! This module contains the [`AttendanceResult`] type and its associated
//! structures: the derived hour fields a host stores on the attendance, and
//! the audit trace explaining how they were obtained.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::DateType;

/// Hour fields derived from one attendance.
///
/// When the shift has a check-out, `worked_hours_day + worked_hours_night`
/// equals `worked_hours_total`. When it has none, every hour field is zero.
///
/// # Example
///
/// ```
/// use attendance_hour_type::calculation::DateType;
/// use attendance_hour_type::models::DerivedHours;
/// use chrono::NaiveDate;
///
/// let hours = DerivedHours::open(NaiveDate::from_ymd_opt(2021, 12, 2).unwrap(), DateType::Normal);
/// assert_eq!(hours.worked_hours_total, 0.0);
/// assert_eq!(hours.worked_hours_night, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedHours {
    /// Elapsed hours between check-in and check-out.
    pub worked_hours_total: f64,
    /// Hours falling inside the night window.
    pub worked_hours_night: f64,
    /// Hours falling outside the night window.
    pub worked_hours_day: f64,
    /// Hours beyond the employee's contracted hours per day.
    pub worked_hours_overtime: f64,
    /// Night hours after the company's night multiplier.
    pub weighted_night_hours: f64,
    /// Overtime hours after the company's overtime multiplier.
    pub weighted_overtime_hours: f64,
    /// The attendance date from the payroll point of view.
    pub local_date: NaiveDate,
    /// Whether that date is a weekday, a Sunday or a public holiday.
    pub date_type: DateType,
}

impl DerivedHours {
    /// Derived hours for a shift that has not been checked out yet.
    pub fn open(local_date: NaiveDate, date_type: DateType) -> Self {
        Self {
            worked_hours_total: 0.0,
            worked_hours_night: 0.0,
            worked_hours_day: 0.0,
            worked_hours_overtime: 0.0,
            weighted_night_hours: 0.0,
            weighted_overtime_hours: 0.0,
            local_date,
            date_type,
        }
    }
}

/// A single step in the audit trace recording a rule decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during computation.
///
/// Warnings flag attendances that were accepted but deserve a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for one attendance computation.
///
/// # Example
///
/// ```
/// use attendance_hour_type::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during computation.
    pub warnings: Vec<AuditWarning>,
    /// The total computation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of classifying one attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceResult {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The ID of the employee the attendance belongs to.
    pub employee_id: String,
    /// The ID of the attendance.
    pub shift_id: String,
    /// The derived hour fields.
    pub hours: DerivedHours,
    /// Complete audit trace of rule decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_sample_hours() -> DerivedHours {
        DerivedHours {
            worked_hours_total: 9.0,
            worked_hours_night: 8.0,
            worked_hours_day: 1.0,
            worked_hours_overtime: 1.0,
            weighted_night_hours: 12.0,
            weighted_overtime_hours: 2.0,
            local_date: make_date("2021-12-13"),
            date_type: DateType::Normal,
        }
    }

    #[test]
    fn test_open_hours_are_zero() {
        let hours = DerivedHours::open(make_date("2021-12-05"), DateType::Sunday);
        assert_eq!(hours.worked_hours_total, 0.0);
        assert_eq!(hours.worked_hours_day, 0.0);
        assert_eq!(hours.worked_hours_overtime, 0.0);
        assert_eq!(hours.weighted_night_hours, 0.0);
        assert_eq!(hours.weighted_overtime_hours, 0.0);
        assert_eq!(hours.date_type, DateType::Sunday);
    }

    #[test]
    fn test_derived_hours_serialization() {
        let json = serde_json::to_value(create_sample_hours()).unwrap();
        assert_eq!(json["worked_hours_night"], 8.0);
        assert_eq!(json["local_date"], "2021-12-13");
        assert_eq!(json["date_type"], "normal");
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "LONG_SHIFT".to_string(),
            message: "Shift runs into the next night window".to_string(),
            severity: "medium".to_string(),
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"LONG_SHIFT\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }

    #[test]
    fn test_attendance_result_serialization() {
        let result = AttendanceResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            employee_id: "emp_001".to_string(),
            shift_id: "att_001".to_string(),
            hours: create_sample_hours(),
            audit_trace: AuditTrace {
                steps: vec![AuditStep {
                    step_number: 1,
                    rule_id: "hour_split".to_string(),
                    rule_name: "Night/Day Hour Split".to_string(),
                    input: serde_json::json!({"check_in": "2021-12-13T21:00:00"}),
                    output: serde_json::json!({"night": 8.0}),
                    reasoning: "8 of 9 hours fall inside the night window".to_string(),
                }],
                warnings: vec![],
                duration_us: 10,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: AttendanceResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }
}
