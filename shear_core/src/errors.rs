//! # Error Types
//!
//! Structured error types for shear_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use shear_core::errors::{CalcError, CalcResult};
//!
//! fn validate_web_width(web_width_cm: f64) -> CalcResult<()> {
//!     if web_width_cm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "web_width_cm".to_string(),
//!             value: web_width_cm.to_string(),
//!             reason: "Web width must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for shear_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A geometric, material or load input is invalid (non-positive, NaN, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An inclination angle falls outside its admissible interval
    #[error("Angle out of range for '{field}': {value_deg}\u{b0} - {reason}")]
    AngleOutOfRange {
        field: String,
        value_deg: f64,
        reason: String,
    },

    /// The strut inclination equation has no real root for this section
    #[error("No real strut inclination: mechanical ratio {reinforcement_ratio:.4} - {reason}")]
    NoRealSolution {
        reinforcement_ratio: f64,
        reason: String,
    },

    /// Material not found in database
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },
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

    /// Create an AngleOutOfRange error
    pub fn angle_out_of_range(field: impl Into<String>, value_deg: f64, reason: impl Into<String>) -> Self {
        CalcError::AngleOutOfRange {
            field: field.into(),
            value_deg,
            reason: reason.into(),
        }
    }

    /// Create a NoRealSolution error
    pub fn no_real_solution(reinforcement_ratio: f64, reason: impl Into<String>) -> Self {
        CalcError::NoRealSolution {
            reinforcement_ratio,
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Check if this error points at a user-editable input (vs. a section
    /// that physically cannot carry the requested truss mechanism)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::AngleOutOfRange { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::AngleOutOfRange { .. } => "ANGLE_OUT_OF_RANGE",
            CalcError::NoRealSolution { .. } => "NO_REAL_SOLUTION",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("web_width_cm", "-23.0", "Web width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_angle_error_serialization() {
        let error = CalcError::angle_out_of_range("strut_angle_deg", 0.0, "Strut inclination must lie in (0, 90)");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::no_real_solution(1.8, "test").error_code(),
            "NO_REAL_SOLUTION"
        );
        assert_eq!(
            CalcError::material_not_found("C99/110").error_code(),
            "MATERIAL_NOT_FOUND"
        );
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::invalid_input("d", "0", "zero").is_input_error());
        assert!(CalcError::angle_out_of_range("a", 91.0, "high").is_input_error());
        assert!(!CalcError::no_real_solution(2.0, "over-reinforced").is_input_error());
    }
}
