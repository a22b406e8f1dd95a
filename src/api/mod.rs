//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints that run the payroll pipeline
//! and return either the JSON result or the text report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
