//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file is a valid configuration.

use serde::Deserialize;

use crate::calculation::{DEFAULT_DAYS_PER_MONTH, DEFAULT_HOURS_PER_DAY};

/// Working calendar used to turn monthly and daily pay into an hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Days in the payroll month (30 by default).
    pub days_per_month: u32,
    /// Working hours per day (8 by default).
    pub hours_per_day: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            days_per_month: DEFAULT_DAYS_PER_MONTH,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }
}

impl CalendarConfig {
    /// Returns this calendar with `days_per_month` replaced when an override is given.
    pub fn with_days_per_month(self, days_per_month: Option<u32>) -> Self {
        match days_per_month {
            Some(days_per_month) => Self {
                days_per_month,
                ..self
            },
            None => self,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the API listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Working calendar.
    pub calendar: CalendarConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_calendar_is_thirty_by_eight() {
        let calendar = CalendarConfig::default();
        assert_eq!(calendar.days_per_month, 30);
        assert_eq!(calendar.hours_per_day, 8);
    }

    #[test]
    fn test_days_override() {
        let calendar = CalendarConfig::default().with_days_per_month(Some(31));
        assert_eq!(calendar.days_per_month, 31);
        assert_eq!(calendar.hours_per_day, 8);

        let unchanged = CalendarConfig::default().with_days_per_month(None);
        assert_eq!(unchanged, CalendarConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: EngineConfig = serde_yaml::from_str("calendar:\n  hours_per_day: 6\n").unwrap();
        assert_eq!(config.calendar.days_per_month, 30);
        assert_eq!(config.calendar.hours_per_day, 6);
        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
    }
}
