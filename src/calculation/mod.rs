//! Calculation logic for the attendance hour-type engine.
//!
//! This module contains the payroll date derivation and date classification,
//! the night/day hour split, overtime and weighting, the full attendance
//! computation that chains them, and check-in/check-out toggling with webcam
//! snapshots.

mod attendance;
mod attendance_action;
mod date_classifier;
mod hour_split;
mod overtime;
mod weighting;

pub use attendance::compute_attendance;
pub use attendance_action::record_attendance_action;
pub use date_classifier::{DateType, classify_date, local_date};
pub use hour_split::{HourSplit, MAX_SHIFT_HOURS, split_hours};
pub use overtime::compute_overtime;
pub use weighting::{WeightedHours, apply_weighting};
