//! # Structural Calculations
//!
//! This module contains all verification types. Each verification
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Verification results (JSON-serializable)
//! - `calculate(input, method) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`shear`] - Shear verification of rectangular reinforced-concrete
//!   sections with transverse reinforcement (variable strut inclination
//!   truss model, NTC 2018)

pub mod shear;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use shear::{calculate, ShearInput, ShearResult, TransverseReinforcement};

/// Shear capacity model used for the verification.
///
/// Both methods evaluate the same plastic truss mechanism; they differ in
/// how the strut inclination and the design strengths are fixed.
///
/// ```rust
/// use shear_core::calculations::ShearMethod;
///
/// let method = ShearMethod::default();
/// assert_eq!(method, ShearMethod::VariableStrut);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShearMethod {
    /// Variable strut inclination - the strut angle is a free input and the
    /// section is screened for the existence of a real equilibrium angle
    #[default]
    VariableStrut,
    /// Simplified method - fixed cot(theta) = 1.2 and fcd without the
    /// long-term coefficient, common in quick manual checks
    Simplified,
}

impl ShearMethod {
    /// All methods for UI selection
    pub const ALL: [ShearMethod; 2] = [ShearMethod::VariableStrut, ShearMethod::Simplified];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ShearMethod::VariableStrut => "Variable strut inclination",
            ShearMethod::Simplified => "Simplified (cot\u{3b8} = 1.2)",
        }
    }

    /// Short abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            ShearMethod::VariableStrut => "VSI",
            ShearMethod::Simplified => "SIMPLIFIED",
        }
    }
}

impl std::fmt::Display for ShearMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_default() {
        assert_eq!(ShearMethod::default(), ShearMethod::VariableStrut);
    }

    #[test]
    fn test_method_serialization() {
        for method in ShearMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            let parsed: ShearMethod = serde_json::from_str(&json).unwrap();
            assert_eq!(method, parsed);
        }
    }

    #[test]
    fn test_method_display() {
        assert_eq!(ShearMethod::VariableStrut.to_string(), "VSI");
        assert_eq!(ShearMethod::Simplified.to_string(), "SIMPLIFIED");
    }
}
