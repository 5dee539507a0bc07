//! # Error Types
//!
//! Structured error types for drywall_core. Derivation steps raise specific
//! variants; the aggregate calculation wraps them into a single
//! [`CalcError::CalculationFailed`] so callers only handle one failure shape.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::errors::{CalcError, CalcResult};
//!
//! fn check_area(total_sqft: f64) -> CalcResult<()> {
//!     if total_sqft <= 0.0 {
//!         return Err(CalcError::InvalidArea { total_sqft });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_area(0.0).unwrap_err();
//! assert_eq!(err.to_string(), "Total square footage must be positive");
//! ```

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for drywall_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// At least one room dimension normalized to zero or less
    #[error("All dimensions must be positive values")]
    InvalidDimensions {
        length_ft: f64,
        width_ft: f64,
        height_ft: f64,
    },

    /// Area handed to the sheet takeoff was zero or negative
    #[error("Total square footage must be positive")]
    InvalidArea { total_sqft: f64 },

    /// An option or parameter is out of its accepted range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Room dimensions failed pattern or range validation
    #[error("{}", .errors.join("\n"))]
    ValidationFailed { errors: Vec<String> },

    /// Wrapper raised by the aggregate calculation around any inner failure
    #[error("Calculation error: {message}")]
    CalculationFailed { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Reading a settings file failed
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError from an I/O failure on `path`
    pub fn file_error(operation: &str, path: &Path, err: &io::Error) -> Self {
        CalcError::FileError {
            operation: operation.to_string(),
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(message: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            message: message.into(),
        }
    }

    /// Wrap an inner step failure, keeping its message.
    pub fn wrap(inner: CalcError) -> Self {
        match inner {
            already @ CalcError::CalculationFailed { .. } => already,
            other => CalcError::calculation_failed(other.to_string()),
        }
    }

    /// Check if the message is meant to be shown to the person typing dimensions
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            CalcError::ValidationFailed { .. } | CalcError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            CalcError::InvalidArea { .. } => "INVALID_AREA",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ValidationFailed { .. } => "VALIDATION_FAILED",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
