//! Error types for the payroll engine.
//!
//! Every fallible operation in the engine returns [`EngineResult`]. Input
//! validation failures carry a human-readable message that names the offending
//! field, so they can be shown to the user verbatim.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidField {
///     field: "Benefícios".to_string(),
///     message: "não pode ser negativo.".to_string(),
/// };
/// assert_eq!(error.to_string(), "Benefícios não pode ser negativo.");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A raw input value could not be turned into a valid amount.
    #[error("{field} {message}")]
    InvalidField {
        /// The display label of the field.
        field: String,
        /// What was wrong with the value.
        message: String,
    },

    /// The worker type tag is not one of the supported classifications.
    #[error("Tipo de trabalhador inválido: '{worker_type}'.")]
    InvalidWorkerType {
        /// The tag that was supplied.
        worker_type: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value outside its allowed range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration key.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl EngineError {
    /// Returns true for failures caused by the calculation input rather than
    /// by the engine configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidField { .. } | EngineError::InvalidWorkerType { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
