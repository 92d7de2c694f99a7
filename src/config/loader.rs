//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company
//! configuration and the public holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;

use super::types::CompanyConfig;

/// Loads and provides access to company configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── company.yaml   # Night window, weighting and overtime settings
/// └── holidays.yaml  # Public holidays and employee regions (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_hour_type::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Night work starts at {}h", loader.company().night_window.start);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    company: CompanyConfig,
    holidays: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `company.yaml` is missing
    /// - Any file contains invalid YAML
    /// - The night window or a multiplier is out of range
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_hour_type::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), attendance_hour_type::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company_path = path.join("company.yaml");
        let company = Self::load_yaml::<CompanyConfig>(&company_path)?;
        company.validate()?;

        let holidays_path = path.join("holidays.yaml");
        let holidays = if holidays_path.exists() {
            Self::load_yaml::<HolidayCalendar>(&holidays_path)?
        } else {
            tracing::debug!(path = %holidays_path.display(), "No holiday calendar, using none");
            HolidayCalendar::default()
        };

        Ok(Self { company, holidays })
    }

    /// Builds a loader from configuration the host already holds.
    pub fn from_parts(company: CompanyConfig, holidays: HolidayCalendar) -> EngineResult<Self> {
        company.validate()?;
        Ok(Self { company, holidays })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the company configuration.
    pub fn company(&self) -> &CompanyConfig {
        &self.company
    }

    /// Returns the public holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::config::NightWindow;
    use crate::models::HolidayLookup;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn write_company_yaml(dir: &Path, contents: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("company.yaml"), contents).unwrap();
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "attendance-hour-type-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.company().night_window, NightWindow::default());
        assert!(loader.company().overtime_enabled);
    }

    #[test]
    fn test_holiday_calendar_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let toussaint = NaiveDate::from_ymd_opt(2021, 11, 1).unwrap();
        assert!(loader.holidays().is_public_holiday(toussaint, "emp_001"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_missing_holidays_file_gives_empty_calendar() {
        let dir = scratch_dir("no-holidays");
        write_company_yaml(&dir, "overtime_enabled: false\n");

        let loader = ConfigLoader::load(&dir).unwrap();
        assert!(loader.holidays().holidays.is_empty());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-yaml");
        write_company_yaml(&dir, "night_window: [not, a, map\n");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_out_of_range_night_window_rejected_on_load() {
        let dir = scratch_dir("bad-window");
        write_company_yaml(&dir, "night_window:\n  start: 25.0\n  end: 6.0\n");

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::InvalidConfig { .. })
        ));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_from_parts_validates() {
        let mut company = CompanyConfig::default();
        company.night_window.end = 30.0;
        assert!(ConfigLoader::from_parts(company, HolidayCalendar::default()).is_err());
    }
}
