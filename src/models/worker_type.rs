//! Worker classification.
//!
//! This module defines the [`WorkerType`] enum, which selects both the input
//! fields that matter for a calculation and the rule used to derive base pay.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The classification of a worker for payroll purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerType {
    /// Paid a fixed monthly salary ("Mensalista").
    Salaried,
    /// Paid per hour worked ("Horista").
    Hourly,
    /// Paid per day worked ("Diarista").
    Daily,
}

impl WorkerType {
    /// The label shown on reports and accepted as input.
    pub fn label(self) -> &'static str {
        match self {
            WorkerType::Salaried => "Mensalista",
            WorkerType::Hourly => "Horista",
            WorkerType::Daily => "Diarista",
        }
    }
}

impl fmt::Display for WorkerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkerType {
    type Err = EngineError;

    /// Parses a worker type tag.
    ///
    /// Accepts the report labels ("Mensalista", "Horista", "Diarista") and the
    /// serialized names ("salaried", "hourly", "daily"), ignoring case and
    /// surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::WorkerType;
    ///
    /// assert_eq!("Horista".parse::<WorkerType>().unwrap(), WorkerType::Hourly);
    /// assert_eq!(" daily ".parse::<WorkerType>().unwrap(), WorkerType::Daily);
    /// assert!("Freelancer".parse::<WorkerType>().is_err());
    /// ```
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_lowercase().as_str() {
            "mensalista" | "salaried" => Ok(WorkerType::Salaried),
            "horista" | "hourly" => Ok(WorkerType::Hourly),
            "diarista" | "daily" => Ok(WorkerType::Daily),
            _ => Err(EngineError::InvalidWorkerType {
                worker_type: tag.to_string(),
            }),
        }
    }
}
