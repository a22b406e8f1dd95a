//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{CalendarConfig, ConfigLoader};

/// Shared application state.
///
/// Holds the loaded engine configuration behind an `Arc`; handlers only
/// read from it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the configured working calendar.
    pub fn calendar(&self) -> &CalendarConfig {
        self.config.calendar()
    }
}
