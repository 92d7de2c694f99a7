//! Attendance hour-type engine.
//!
//! This crate classifies attendance records for payroll: it splits each
//! shift into nighttime and daytime hours, types the shift's date as a
//! weekday, Sunday or public holiday, computes overtime, and applies the
//! company's weighting multipliers. Check-in and check-out webcam snapshots
//! travel with the attendance.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
