//! Custom error types for ledger-report
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The two report errors carry the status code
//! the service layer hands back to callers.

use thiserror::Error;

/// The main error type for ledger-report operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Period start falls after its end
    #[error("Invalid period.")]
    InvalidPeriod { period: String },

    /// No valid record falls inside the requested period
    #[error("No records found")]
    NoRecordsFound { period: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Invalid user input (dates, periods, formats)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ReportError {
    /// Create an invalid period error for the described period
    pub fn invalid_period(period: impl std::fmt::Display) -> Self {
        Self::InvalidPeriod {
            period: period.to_string(),
        }
    }

    /// Create a "no records" error for the described period
    pub fn no_records(period: impl std::fmt::Display) -> Self {
        Self::NoRecordsFound {
            period: period.to_string(),
        }
    }

    /// Status code reported to callers of the service layer
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidPeriod { .. } => 400,
            Self::NoRecordsFound { .. } => 404,
            _ => 500,
        }
    }

    /// Check if this is an invalid period error
    pub fn is_invalid_period(&self) -> bool {
        matches!(self, Self::InvalidPeriod { .. })
    }

    /// Check if this is a "no records" error
    pub fn is_no_records(&self) -> bool {
        matches!(self, Self::NoRecordsFound { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ReportError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ledger-report operations
pub type ReportResult<T> = Result<T, ReportError>;
