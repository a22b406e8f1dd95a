//! Monthly payroll engine for Brazilian wages.
//!
//! This crate validates raw payroll input for salaried, hourly and daily
//! workers, assembles gross pay, withholds social security (INSS) and income
//! tax (IRRF), reports the employer's severance-fund deposit (FGTS), and
//! renders the result as a text report or a JSON document with an audit trace.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
