//! Core data models for the attendance hour-type engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance_result;
mod employee;
mod holiday;
mod shift;
mod snapshot;

pub use attendance_result::{AttendanceResult, AuditStep, AuditTrace, AuditWarning, DerivedHours};
pub use employee::Employee;
pub use holiday::{HolidayCalendar, HolidayLookup, NATIONAL_REGION, PublicHoliday};
pub use shift::{Shift, ShiftInstant, localize};
pub use snapshot::Snapshot;

pub(crate) use shift::duration_hours;
