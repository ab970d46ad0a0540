//! # Error Types
//!
//! Structured error types for phys_core. Only the typed solver and the
//! settings loader produce errors; the legacy sentinel functions never fail
//! and report problems through their return value (0, infinity or NaN).
//!
//! ## Example
//!
//! ```rust
//! use phys_core::errors::{CalcError, CalcResult};
//!
//! fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
//!     if value <= 0.0 {
//!         return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(require_positive("mass", -1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for phys_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for evaluation and configuration.
///
/// Each variant carries enough context to fix the request programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (not a number, malformed pair, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No law is registered under this name
    #[error("Unknown law: {law_name}")]
    UnknownLaw { law_name: String },

    /// The quantity name does not belong to the law
    #[error("Unknown quantity '{quantity}' for {law} (expected one of: {expected})")]
    UnknownQuantity {
        law: String,
        quantity: String,
        expected: String,
    },

    /// Every quantity was supplied, so there is nothing to solve for
    #[error("Nothing to solve: every quantity of {law} was supplied")]
    NothingToSolve { law: String },

    /// More than one quantity was left unknown
    #[error("Underdetermined: {law} has {} unknown quantities ({})", .unknowns.len(), .unknowns.join(", "))]
    Underdetermined { law: String, unknowns: Vec<String> },

    /// The solve produced infinity or NaN
    #[error("Non-finite result solving {law} for {quantity}: {value}")]
    NonFiniteResult {
        law: String,
        quantity: String,
        value: String,
    },

    /// Settings file could not be read or parsed
    #[error("Config error: '{path}' - {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownLaw error
    pub fn unknown_law(law_name: impl Into<String>) -> Self {
        CalcError::UnknownLaw {
            law_name: law_name.into(),
        }
    }

    /// Create an UnknownQuantity error
    pub fn unknown_quantity(law: impl Into<String>, quantity: impl Into<String>, expected: &[&str]) -> Self {
        CalcError::UnknownQuantity {
            law: law.into(),
            quantity: quantity.into(),
            expected: expected.join(", "),
        }
    }

    /// Create a NothingToSolve error
    pub fn nothing_to_solve(law: impl Into<String>) -> Self {
        CalcError::NothingToSolve { law: law.into() }
    }

    /// Create an Underdetermined error
    pub fn underdetermined(law: impl Into<String>, unknowns: Vec<String>) -> Self {
        CalcError::Underdetermined {
            law: law.into(),
            unknowns,
        }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite(law: impl Into<String>, quantity: impl Into<String>, value: f64) -> Self {
        CalcError::NonFiniteResult {
            law: law.into(),
            quantity: quantity.into(),
            value: value.to_string(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the request itself is at fault and can be corrected by the caller
    pub fn is_request_error(&self) -> bool {
        !matches!(self, CalcError::ConfigError { .. } | CalcError::SerializationError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownLaw { .. } => "UNKNOWN_LAW",
            CalcError::UnknownQuantity { .. } => "UNKNOWN_QUANTITY",
            CalcError::NothingToSolve { .. } => "NOTHING_TO_SOLVE",
            CalcError::Underdetermined { .. } => "UNDERDETERMINED",
            CalcError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::underdetermined("ohms_law", vec!["voltage".into(), "resistance".into()]);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Underdetermined\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_law("hookes_law").error_code(), "UNKNOWN_LAW");
        assert_eq!(CalcError::nothing_to_solve("ohms_law").error_code(), "NOTHING_TO_SOLVE");
        assert_eq!(
            CalcError::config_error("physeq.toml", "missing").error_code(),
            "CONFIG_ERROR"
        );
    }

    #[test]
    fn test_underdetermined_message_lists_unknowns() {
        let error = CalcError::underdetermined("ohms_law", vec!["voltage".into(), "resistance".into()]);
        assert_eq!(
            error.to_string(),
            "Underdetermined: ohms_law has 2 unknown quantities (voltage, resistance)"
        );
    }

    #[test]
    fn test_unknown_quantity_message() {
        let error = CalcError::unknown_quantity("ohms_law", "power", &["voltage", "resistance", "current"]);
        assert!(error.to_string().contains("expected one of: voltage, resistance, current"));
        assert!(error.is_request_error());
    }
}
