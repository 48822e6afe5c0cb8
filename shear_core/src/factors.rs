//! # Partial Safety Factors
//!
//! Material partial factors for reinforced-concrete design per NTC 2018.
//!
//! ## Overview
//!
//! Characteristic strengths (fck, fyk) must be divided by partial factors
//! to obtain design strengths:
//!
//! ```text
//! fcd = α_cc × fck / γ_C
//! fyd = fyk / γ_S
//! ```
//!
//! ## Factor Summary
//!
//! | Factor | Description                          | Standard Value |
//! |--------|--------------------------------------|----------------|
//! | γ_C    | Concrete partial factor              | 1.5            |
//! | γ_S    | Reinforcing steel partial factor     | 1.15           |
//! | α_cc   | Long-term compressive strength coeff | 0.85           |
//!
//! ## Reference
//!
//! NTC 2018 (D.M. 17/01/2018), Sections 4.1.2.1.1.1 and 4.1.2.1.1.3

use serde::{Deserialize, Serialize};

use crate::equations::shear as eq;
use crate::errors::{CalcError, CalcResult};

// ============================================================================
// NTC Code Section References
// ============================================================================

/// NTC code section references for shear design checks and material factors.
///
/// These constants provide traceable references to the Italian building code
/// (NTC 2018) and, where the formulas coincide, to EN 1992-1-1.
pub mod ntc_ref {
    // Design checks
    /// Shear resistance of members with transverse reinforcement
    pub const SHEAR_WITH_REINFORCEMENT: &str = "NTC 2018 \u{a7}4.1.2.3.5.2";
    /// Stirrup ("shear-tension") capacity formula
    pub const STIRRUP_CAPACITY: &str = "NTC 2018 \u{a7}4.1.2.3.5.2 / EN 1992-1-1 Eq. (6.8)";
    /// Concrete strut ("shear-compression") capacity formula
    pub const STRUT_CAPACITY: &str = "NTC 2018 \u{a7}4.1.2.3.5.2 / EN 1992-1-1 Eq. (6.9)";
    /// Admissible strut inclination interval (1 <= cot \u{3b8} <= 2.5)
    pub const STRUT_INCLINATION: &str = "NTC 2018 \u{a7}4.1.2.3.5.2";

    // Material factors
    /// Design compressive strength fcd = \u{3b1}_cc \u{b7} fck / \u{3b3}_C
    pub const CONCRETE_DESIGN_STRENGTH: &str = "NTC 2018 \u{a7}4.1.2.1.1.1";
    /// Design yield strength fyd = fyk / \u{3b3}_S
    pub const STEEL_DESIGN_STRENGTH: &str = "NTC 2018 \u{a7}4.1.2.1.1.3";

    // Material databases
    /// Concrete strength classes
    pub const CONCRETE_CLASSES: &str = "NTC 2018 Tab. 4.1.I";
    /// Mean tensile strength and elastic modulus correlations
    pub const CONCRETE_PROPERTIES: &str = "EN 1992-1-1 Table 3.1";
    /// Reinforcing steel for concrete structures
    pub const REBAR_GRADES: &str = "NTC 2018 \u{a7}11.3.2";
}

/// Collection of material partial factors for a shear verification
///
/// The defaults are the NTC 2018 values for persistent and transient design
/// situations. Override them only for accidental situations or assessments
/// of existing structures, where national annexes allow different values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialFactors {
    /// Concrete partial factor γ_C
    pub gamma_c: f64,

    /// Reinforcing steel partial factor γ_S
    pub gamma_s: f64,

    /// Long-term compressive strength coefficient α_cc
    pub alpha_cc: f64,
}

impl Default for PartialFactors {
    fn default() -> Self {
        Self {
            gamma_c: 1.5,
            gamma_s: 1.15,
            alpha_cc: 0.85,
        }
    }
}

impl PartialFactors {
    /// Create the standard NTC 2018 factor set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the concrete partial factor
    pub fn with_gamma_c(mut self, gamma_c: f64) -> Self {
        self.gamma_c = gamma_c;
        self
    }

    /// Set the steel partial factor
    pub fn with_gamma_s(mut self, gamma_s: f64) -> Self {
        self.gamma_s = gamma_s;
        self
    }

    /// Set the long-term coefficient
    pub fn with_alpha_cc(mut self, alpha_cc: f64) -> Self {
        self.alpha_cc = alpha_cc;
        self
    }

    /// Design compressive strength fcd = α_cc × fck / γ_C in MPa
    pub fn fcd_mpa(&self, fck_mpa: f64) -> f64 {
        eq::design_compressive_strength(fck_mpa, self.alpha_cc, self.gamma_c)
    }

    /// Design yield strength fyd = fyk / γ_S in MPa
    pub fn fyd_mpa(&self, fyk_mpa: f64) -> f64 {
        eq::design_yield_strength(fyk_mpa, self.gamma_s)
    }

    /// Validate that all factors are physically meaningful
    ///
    /// Partial factors below 1.0 would inflate strengths above their
    /// characteristic values, so they are rejected along with non-finite
    /// values. α_cc must lie in (0, 1].
    pub fn validate(&self) -> CalcResult<()> {
        if !self.gamma_c.is_finite() || self.gamma_c < 1.0 {
            return Err(CalcError::invalid_input(
                "factors.gamma_c",
                self.gamma_c.to_string(),
                "Concrete partial factor must be finite and >= 1.0",
            ));
        }
        if !self.gamma_s.is_finite() || self.gamma_s < 1.0 {
            return Err(CalcError::invalid_input(
                "factors.gamma_s",
                self.gamma_s.to_string(),
                "Steel partial factor must be finite and >= 1.0",
            ));
        }
        if !self.alpha_cc.is_finite() || self.alpha_cc <= 0.0 || self.alpha_cc > 1.0 {
            return Err(CalcError::invalid_input(
                "factors.alpha_cc",
                self.alpha_cc.to_string(),
                "Long-term coefficient must lie in (0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factors() {
        let factors = PartialFactors::default();
        assert_eq!(factors.gamma_c, 1.5);
        assert_eq!(factors.gamma_s, 1.15);
        assert_eq!(factors.alpha_cc, 0.85);
    }

    #[test]
    fn test_design_strengths() {
        let factors = PartialFactors::default();
        // fcd = 0.85 × 35 / 1.5 = 19.833 MPa
        assert!((factors.fcd_mpa(35.0) - 19.8333).abs() < 0.001);
        // fyd = 430 / 1.15 = 373.913 MPa
        assert!((factors.fyd_mpa(430.0) - 373.913).abs() < 0.001);
    }

    #[test]
    fn test_builder() {
        let factors = PartialFactors::new()
            .with_gamma_c(1.2)
            .with_gamma_s(1.0)
            .with_alpha_cc(1.0);
        assert_eq!(factors.fcd_mpa(30.0), 25.0);
        assert_eq!(factors.fyd_mpa(450.0), 450.0);
    }

    #[test]
    fn test_validation() {
        assert!(PartialFactors::default().validate().is_ok());

        let low_gamma = PartialFactors::new().with_gamma_c(0.9);
        assert!(low_gamma.validate().is_err());

        let bad_alpha = PartialFactors::new().with_alpha_cc(1.2);
        let err = bad_alpha.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization() {
        let factors = PartialFactors::new().with_gamma_c(1.4);
        let json = serde_json::to_string(&factors).unwrap();
        let parsed: PartialFactors = serde_json::from_str(&json).unwrap();
        assert_eq!(factors, parsed);
    }
}
