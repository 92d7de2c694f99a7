//! Shared state for the attendance API.
//!
//! Every request is computed against the same company settings and holiday
//! calendar, loaded once at startup.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Handle on the company settings and holiday calendar, cheap to clone into
/// each request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps loaded configuration for sharing across requests.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The night window, weighting, overtime switch and holiday calendar.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
