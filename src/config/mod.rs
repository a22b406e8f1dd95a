//! Configuration loading and management for the payroll engine.
//!
//! This module loads the working calendar and server settings from
//! `engine.yaml`. The tax tables are statutory and live in code, not here.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Listening on {}", config.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{CalendarConfig, EngineConfig, ServerConfig};
