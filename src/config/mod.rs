//! Configuration loading and management for the attendance hour-type engine.
//!
//! This module provides the company-scoped settings (night window, weighting
//! multipliers, overtime toggle) and loads them, together with the public
//! holiday calendar, from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_hour_type::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Overtime enabled: {}", config.company().overtime_enabled);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompanyConfig, DEFAULT_NIGHT_END, DEFAULT_NIGHT_START, NightWindow, WeightingConfig,
};
