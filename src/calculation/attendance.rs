//! Full attendance computation.
//!
//! This module runs every rule against one attendance, in the order the
//! derived fields depend on each other, and records an audit step for each:
//!
//! 1. payroll date from the check-in
//! 2. date classification (weekday, Sunday, public holiday)
//! 3. night/day hour split
//! 4. overtime
//! 5. weighting

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::config::CompanyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceResult, AuditStep, AuditTrace, AuditWarning, DerivedHours, Employee, HolidayLookup,
    Shift,
};

use super::date_classifier::{classify_date, local_date};
use super::hour_split::split_hours;
use super::overtime::compute_overtime;
use super::weighting::apply_weighting;

/// Computes every derived hour field of an attendance.
///
/// The host calls this whenever the check-in, check-out or company
/// configuration changes, and stores [`AttendanceResult::hours`].
///
/// # Errors
///
/// - [`EngineError::InvalidShift`] if the attendance belongs to another
///   employee or checks out before it checks in
/// - [`EngineError::ShiftTooLong`] if more than 24 hours elapsed
/// - [`EngineError::InvalidConfig`] if the company configuration is out of range
///
/// # Example
///
/// ```
/// use attendance_hour_type::calculation::{compute_attendance, DateType};
/// use attendance_hour_type::config::CompanyConfig;
/// use attendance_hour_type::models::{Employee, HolidayCalendar, Shift};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
///
/// let employee = Employee::new("emp_001", chrono_tz::Europe::Paris).with_hours_per_day(8.0);
/// let shift = Shift::new("att_001", "emp_001", at("2021-12-02 21:00"))
///     .with_check_out(at("2021-12-03 06:00"));
/// let company = CompanyConfig { overtime_enabled: true, ..CompanyConfig::default() };
///
/// let result = compute_attendance(&shift, &employee, &company, &HolidayCalendar::default()).unwrap();
///
/// assert_eq!(result.hours.worked_hours_night, 8.0);
/// assert_eq!(result.hours.worked_hours_day, 1.0);
/// assert_eq!(result.hours.worked_hours_overtime, 1.0);
/// assert_eq!(result.hours.date_type, DateType::Normal);
/// ```
pub fn compute_attendance<H>(
    shift: &Shift,
    employee: &Employee,
    company: &CompanyConfig,
    holidays: &H,
) -> EngineResult<AttendanceResult>
where
    H: HolidayLookup + ?Sized,
{
    let start_time = Instant::now();

    if shift.employee_id != employee.id {
        return Err(EngineError::InvalidShift {
            shift_id: shift.id.clone(),
            message: format!(
                "belongs to employee '{}', not '{}'",
                shift.employee_id, employee.id
            ),
        });
    }
    company.validate()?;

    let mut steps = Vec::with_capacity(5);
    let mut warnings = Vec::new();
    let tz = employee.timezone;

    // Step 1: payroll date
    let date = local_date(&shift.check_in, tz);
    steps.push(AuditStep {
        step_number: 1,
        rule_id: "local_date".to_string(),
        rule_name: "Payroll Date".to_string(),
        input: serde_json::json!({
            "check_in": shift.check_in,
            "timezone": tz.name(),
        }),
        output: serde_json::json!({ "local_date": date }),
        reasoning: format!("Check-in falls on {} in {}", date, tz.name()),
    });

    // Step 2: date classification
    let date_type = classify_date(date, &employee.id, holidays);
    steps.push(AuditStep {
        step_number: 2,
        rule_id: "date_classification".to_string(),
        rule_name: "Date Classification".to_string(),
        input: serde_json::json!({
            "local_date": date,
            "employee_id": employee.id,
        }),
        output: serde_json::json!({ "date_type": date_type }),
        reasoning: format!("{} is classified as {}", date, date_type),
    });
    tracing::debug!(shift_id = %shift.id, %date, %date_type, "Classified attendance date");

    // Step 3: night/day split
    let split = split_hours(
        &shift.check_in,
        shift.check_out.as_ref(),
        tz,
        date,
        &company.night_window,
    )
    .map_err(|e| e.for_shift(&shift.id))?;
    steps.push(AuditStep {
        step_number: 3,
        rule_id: "hour_split".to_string(),
        rule_name: "Night/Day Hour Split".to_string(),
        input: serde_json::json!({
            "check_in": shift.check_in,
            "check_out": shift.check_out,
            "night_start": company.night_window.start,
            "night_end": company.night_window.end,
        }),
        output: serde_json::json!({
            "worked_hours_total": split.total,
            "worked_hours_night": split.night,
            "worked_hours_day": split.day,
        }),
        reasoning: if shift.is_open() {
            "No check-out yet, all hours are zero".to_string()
        } else {
            format!(
                "{} of {} hours fall inside the night window",
                split.night, split.total
            )
        },
    });
    if split.runs_into_next_night {
        warnings.push(AuditWarning {
            code: "LONG_SHIFT".to_string(),
            message: format!(
                "Very long shift for employee {}: check-out runs into the following night",
                employee.id
            ),
            severity: "medium".to_string(),
        });
    }

    // Step 4: overtime
    let overtime = compute_overtime(split.total, employee.hours_per_day, company.overtime_enabled);
    steps.push(AuditStep {
        step_number: 4,
        rule_id: "overtime".to_string(),
        rule_name: "Overtime".to_string(),
        input: serde_json::json!({
            "worked_hours_total": split.total,
            "hours_per_day": employee.hours_per_day,
            "overtime_enabled": company.overtime_enabled,
        }),
        output: serde_json::json!({ "worked_hours_overtime": overtime }),
        reasoning: overtime_reasoning(split.total, employee.hours_per_day, company.overtime_enabled),
    });

    // Step 5: weighting
    let weighted = apply_weighting(split.night, overtime, &company.weighting);
    steps.push(AuditStep {
        step_number: 5,
        rule_id: "weighting".to_string(),
        rule_name: "Night and Overtime Weighting".to_string(),
        input: serde_json::json!({
            "worked_hours_night": split.night,
            "worked_hours_overtime": overtime,
            "weighting": company.weighting,
        }),
        output: serde_json::json!({
            "weighted_night_hours": weighted.weighted_night,
            "weighted_overtime_hours": weighted.weighted_overtime,
        }),
        reasoning: format!(
            "Night x{}, overtime x{}",
            if company.weighting.weight_night_enabled {
                company.weighting.weight_night_multiplier
            } else {
                1.0
            },
            if company.weighting.weight_overtime_enabled {
                company.weighting.weight_overtime_multiplier
            } else {
                1.0
            }
        ),
    });

    let hours = if shift.is_open() {
        DerivedHours::open(date, date_type)
    } else {
        DerivedHours {
            worked_hours_total: split.total,
            worked_hours_night: split.night,
            worked_hours_day: split.day,
            worked_hours_overtime: overtime,
            weighted_night_hours: weighted.weighted_night,
            weighted_overtime_hours: weighted.weighted_overtime,
            local_date: date,
            date_type,
        }
    };

    let duration_us = start_time.elapsed().as_micros() as u64;
    tracing::info!(
        shift_id = %shift.id,
        employee_id = %employee.id,
        total = hours.worked_hours_total,
        night = hours.worked_hours_night,
        overtime = hours.worked_hours_overtime,
        duration_us,
        "Attendance hours computed"
    );

    Ok(AttendanceResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        shift_id: shift.id.clone(),
        hours,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

fn overtime_reasoning(total: f64, hours_per_day: Option<f64>, enabled: bool) -> String {
    match hours_per_day {
        _ if !enabled => "Overtime is disabled for the company".to_string(),
        None => "Employee has no work schedule".to_string(),
        Some(contracted) if total > contracted => format!(
            "{} hours worked exceeds {} contracted hours by {} hours",
            total,
            contracted,
            total - contracted
        ),
        Some(contracted) => format!(
            "{} hours worked is within {} contracted hours",
            total, contracted
        ),
    }
}
