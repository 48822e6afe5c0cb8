//! # Shear Verification of Reinforced-Concrete Sections
//!
//! Verifies a rectangular web with transverse reinforcement using the
//! variable strut inclination truss model of NTC 2018 (EN 1992-1-1 6.2.3).
//! The section passes when the design shear demand does not exceed the
//! smaller of the strut-crushing and stirrup-yielding capacities.
//!
//! ## Assumptions
//!
//! - Rectangular web of width bw and effective depth d
//! - Internal lever arm z = 0.9 d
//! - Designed shear reinforcement is present (unreinforced webs are out of scope)
//! - No axial force acting on the section
//! - Uniform stirrup layout along the member
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use shear_core::calculations::shear::{ShearInput, TransverseReinforcement, calculate};
//! use shear_core::calculations::ShearMethod;
//!
//! let input = ShearInput {
//!     label: "T-1".to_string(),
//!     web_width_cm: 23.0,
//!     effective_depth_cm: 90.0,
//!     concrete_fck_mpa: 35.0,
//!     steel_fyk_mpa: 430.0,
//!     reinforcement: TransverseReinforcement::stirrups(8.0, 2),
//!     stirrup_spacing_cm: 20.0,
//!     strut_angle_deg: 45.0,
//!     stirrup_angle_deg: 90.0,
//!     design_shear_kn: 100.0,
//!     factors: Default::default(),
//! };
//!
//! let result = calculate(&input, ShearMethod::VariableStrut).unwrap();
//!
//! println!("VRd,c = {:.2} kN", result.strut_capacity_kn);
//! println!("VRd,s = {:.2} kN", result.stirrup_capacity_kn);
//! println!("VRd   = {:.2} kN", result.governing_capacity_kn);
//! println!("Pass: {}", result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::shear::{
    cotangent, required_strut_angle, stirrup_area_per_meter, stirrup_capacity,
    stirrup_capacity_simplified, stirrup_mechanical_ratio, strut_angle_radicand, strut_capacity,
    strut_capacity_simplified, SIMPLIFIED_COT_THETA,
};
use crate::errors::{CalcError, CalcResult};
use crate::factors::PartialFactors;
use crate::units::{Degrees, HectoNewtons, KiloNewtons, Radians};

use super::ShearMethod;

/// Transverse reinforcement description.
///
/// Stirrup layouts are usually given as bar diameter, leg count and spacing;
/// the area form accepts a pre-computed steel area per meter instead, which is
/// how tabulated designs and the fixed-inclination shortcut state it.
///
/// ## JSON Examples
///
/// ```json
/// { "type": "Stirrups", "diameter_mm": 8.0, "legs": 2 }
/// ```
///
/// ```json
/// { "type": "Area", "asw_cm2_per_m": 5.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransverseReinforcement {
    /// Stirrups described by bar diameter and leg count
    Stirrups {
        /// Stirrup bar diameter in mm
        diameter_mm: f64,
        /// Legs crossing the shear crack per stirrup (2 for a closed stirrup)
        legs: u32,
    },
    /// Steel area per meter of beam axis given directly
    Area {
        /// Transverse reinforcement area in cm²/m
        asw_cm2_per_m: f64,
    },
}

impl TransverseReinforcement {
    /// Stirrup layout from bar diameter (mm) and leg count
    pub fn stirrups(diameter_mm: f64, legs: u32) -> Self {
        TransverseReinforcement::Stirrups { diameter_mm, legs }
    }

    /// Direct steel area in cm² per meter of beam
    pub fn area(asw_cm2_per_m: f64) -> Self {
        TransverseReinforcement::Area { asw_cm2_per_m }
    }

    /// Transverse steel area per meter of beam axis (cm²/m)
    ///
    /// For stirrup layouts the area follows from diameter, legs and spacing;
    /// the direct-area form returns its value unchanged.
    pub fn asw_cm2_per_m(&self, spacing_cm: f64) -> f64 {
        match self {
            TransverseReinforcement::Stirrups { diameter_mm, legs } => {
                stirrup_area_per_meter(*diameter_mm, *legs, spacing_cm)
            }
            TransverseReinforcement::Area { asw_cm2_per_m } => *asw_cm2_per_m,
        }
    }

    /// Validate the reinforcement description
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            TransverseReinforcement::Stirrups { diameter_mm, legs } => {
                if !diameter_mm.is_finite() || *diameter_mm <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "reinforcement.diameter_mm",
                        diameter_mm.to_string(),
                        "Stirrup diameter must be positive",
                    ));
                }
                if *legs == 0 {
                    return Err(CalcError::invalid_input(
                        "reinforcement.legs",
                        legs.to_string(),
                        "At least one stirrup leg is required",
                    ));
                }
            }
            TransverseReinforcement::Area { asw_cm2_per_m } => {
                if !asw_cm2_per_m.is_finite() || *asw_cm2_per_m <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "reinforcement.asw_cm2_per_m",
                        asw_cm2_per_m.to_string(),
                        "Reinforcement area must be positive",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Input parameters for a shear verification.
///
/// Geometry is in cm and strengths in MPa, the customary units of Italian
/// design practice; the demand is in kN.
///
/// ## JSON Example (stirrup layout, default partial factors)
///
/// ```json
/// {
///   "label": "T-1",
///   "web_width_cm": 23.0,
///   "effective_depth_cm": 90.0,
///   "concrete_fck_mpa": 35.0,
///   "steel_fyk_mpa": 430.0,
///   "reinforcement": { "type": "Stirrups", "diameter_mm": 8.0, "legs": 2 },
///   "stirrup_spacing_cm": 20.0,
///   "strut_angle_deg": 45.0,
///   "stirrup_angle_deg": 90.0,
///   "design_shear_kn": 100.0
/// }
/// ```
///
/// ## JSON Example (direct area, explicit partial factors)
///
/// ```json
/// {
///   "label": "W-3",
///   "web_width_cm": 30.0,
///   "effective_depth_cm": 50.0,
///   "concrete_fck_mpa": 30.0,
///   "steel_fyk_mpa": 450.0,
///   "reinforcement": { "type": "Area", "asw_cm2_per_m": 5.0 },
///   "stirrup_spacing_cm": 15.0,
///   "strut_angle_deg": 40.0,
///   "stirrup_angle_deg": 90.0,
///   "design_shear_kn": 350.0,
///   "factors": { "gamma_c": 1.5, "gamma_s": 1.15, "alpha_cc": 0.85 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearInput {
    /// User label for this verification (e.g., "T-1", "Girder at Grid B")
    pub label: String,

    /// Web width bw in cm
    pub web_width_cm: f64,

    /// Effective depth d in cm
    pub effective_depth_cm: f64,

    /// Concrete characteristic cylinder strength fck in MPa
    pub concrete_fck_mpa: f64,

    /// Stirrup steel characteristic yield strength fyk in MPa
    pub steel_fyk_mpa: f64,

    /// Transverse reinforcement (stirrup layout or direct area)
    pub reinforcement: TransverseReinforcement,

    /// Stirrup spacing s along the beam axis in cm
    pub stirrup_spacing_cm: f64,

    /// Assumed strut inclination θ in degrees, strictly inside (0, 90)
    ///
    /// Ignored by the simplified method, which fixes cot θ = 1.2.
    pub strut_angle_deg: f64,

    /// Stirrup inclination α in degrees, in (0, 90]; 90 means vertical legs
    pub stirrup_angle_deg: f64,

    /// Design shear demand VSd in kN
    pub design_shear_kn: f64,

    /// Partial safety factors; defaults to the NTC 2018 values
    #[serde(default)]
    pub factors: PartialFactors,
}

impl ShearInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.web_width_cm.is_finite() || self.web_width_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "web_width_cm",
                self.web_width_cm.to_string(),
                "Web width must be positive",
            ));
        }
        if !self.effective_depth_cm.is_finite() || self.effective_depth_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "effective_depth_cm",
                self.effective_depth_cm.to_string(),
                "Effective depth must be positive",
            ));
        }
        if !self.concrete_fck_mpa.is_finite() || self.concrete_fck_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "concrete_fck_mpa",
                self.concrete_fck_mpa.to_string(),
                "Concrete characteristic strength must be positive",
            ));
        }
        if !self.steel_fyk_mpa.is_finite() || self.steel_fyk_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "steel_fyk_mpa",
                self.steel_fyk_mpa.to_string(),
                "Steel characteristic yield strength must be positive",
            ));
        }
        self.reinforcement.validate()?;
        if !self.stirrup_spacing_cm.is_finite() || self.stirrup_spacing_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "stirrup_spacing_cm",
                self.stirrup_spacing_cm.to_string(),
                "Stirrup spacing must be positive",
            ));
        }
        if !(self.strut_angle_deg > 0.0 && self.strut_angle_deg < 90.0) {
            return Err(CalcError::angle_out_of_range(
                "strut_angle_deg",
                self.strut_angle_deg,
                "Strut inclination must lie strictly between 0 and 90 degrees",
            ));
        }
        if !(self.stirrup_angle_deg > 0.0 && self.stirrup_angle_deg <= 90.0) {
            return Err(CalcError::angle_out_of_range(
                "stirrup_angle_deg",
                self.stirrup_angle_deg,
                "Stirrup inclination must lie above 0 and at most 90 degrees",
            ));
        }
        if !self.design_shear_kn.is_finite() || self.design_shear_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "design_shear_kn",
                self.design_shear_kn.to_string(),
                "Design shear must be non-negative",
            ));
        }
        self.factors.validate()?;
        Ok(())
    }

    /// Transverse steel area per meter of beam axis (cm²/m)
    pub fn asw_cm2_per_m(&self) -> f64 {
        self.reinforcement.asw_cm2_per_m(self.stirrup_spacing_cm)
    }

    /// Strut inclination θ in radians
    pub fn strut_angle_rad(&self) -> f64 {
        Radians::from(Degrees::new(self.strut_angle_deg)).value()
    }

    /// Stirrup inclination α in radians
    pub fn stirrup_angle_rad(&self) -> f64 {
        Radians::from(Degrees::new(self.stirrup_angle_deg)).value()
    }
}

/// Results from a shear verification.
///
/// Capacities are reported in kN alongside the intermediate quantities an
/// engineer checks by hand (design strengths, reinforcement ratio, truss
/// geometry).
///
/// ## JSON Example
///
/// ```json
/// {
///   "strut_capacity_kn": 923.74,
///   "stirrup_capacity_kn": 761.19,
///   "governing_capacity_kn": 761.19,
///   "demand_kn": 100.0,
///   "utilization": 0.13,
///   "verified": true,
///   "asw_cm2_per_m": 5.03,
///   "reinforcement_ratio": 0.41,
///   "required_strut_angle_rad": 0.87,
///   "fcd_mpa": 19.83,
///   "fyd_mpa": 373.91,
///   "cot_theta": 1.0,
///   "cot_alpha": 0.0,
///   "method": "VariableStrut"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearResult {
    // === Capacities ===
    /// Shear-compression capacity VRd,c (concrete strut crushing) in kN
    pub strut_capacity_kn: f64,

    /// Shear-tension capacity VRd,s (stirrup yielding) in kN
    pub stirrup_capacity_kn: f64,

    /// Governing capacity VRd = min(VRd,c, VRd,s) in kN
    pub governing_capacity_kn: f64,

    // === Verdict ===
    /// Design shear demand VSd in kN, echoed from the input
    pub demand_kn: f64,

    /// Demand over governing capacity
    ///
    /// Must be ≤ 1.0 to pass.
    pub utilization: f64,

    /// True iff demand ≤ governing capacity
    pub verified: bool,

    // === Reinforcement ===
    /// Transverse steel area per meter of beam axis (cm²/m)
    pub asw_cm2_per_m: f64,

    /// Mechanical transverse-reinforcement ratio ω_sw
    pub reinforcement_ratio: f64,

    /// Strut inclination that balances strut and stirrup capacity (radians)
    ///
    /// Informational; the verdict uses the assumed inclination.
    pub required_strut_angle_rad: f64,

    // === Design Strengths ===
    /// Design concrete compressive strength fcd in MPa
    pub fcd_mpa: f64,

    /// Design stirrup yield strength fyd in MPa
    pub fyd_mpa: f64,

    // === Truss Geometry ===
    /// Cotangent of the strut inclination used for the capacities
    pub cot_theta: f64,

    /// Cotangent of the stirrup inclination
    pub cot_alpha: f64,

    // === Method ===
    /// Capacity model the verification was run with
    pub method: ShearMethod,
}

impl ShearResult {
    /// Check if the verification passes (demand ≤ governing capacity)
    pub fn passes(&self) -> bool {
        self.demand_kn <= self.governing_capacity_kn
    }

    /// Get a description of what governs the capacity
    pub fn governing_condition(&self) -> &'static str {
        if self.strut_capacity_kn <= self.stirrup_capacity_kn {
            "Concrete strut"
        } else {
            "Stirrups"
        }
    }

    /// Balancing strut inclination in degrees
    pub fn required_strut_angle_deg(&self) -> f64 {
        Degrees::from(Radians::new(self.required_strut_angle_rad)).value()
    }
}

/// Run the shear verification.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - Section, materials, reinforcement, angles and demand
/// * `method` - Capacity model (variable strut inclination or simplified)
///
/// # Returns
///
/// * `Ok(ShearResult)` - Capacities, verdict and intermediate quantities
/// * `Err(CalcError)` - Structured error if inputs are invalid or the
///   section admits no real equilibrium strut inclination
///
/// # Example
///
/// ```rust
/// use shear_core::calculations::shear::{ShearInput, TransverseReinforcement, calculate};
/// use shear_core::calculations::ShearMethod;
///
/// let input = ShearInput {
///     label: "T-1".to_string(),
///     web_width_cm: 23.0,
///     effective_depth_cm: 90.0,
///     concrete_fck_mpa: 35.0,
///     steel_fyk_mpa: 430.0,
///     reinforcement: TransverseReinforcement::stirrups(8.0, 2),
///     stirrup_spacing_cm: 20.0,
///     strut_angle_deg: 45.0,
///     stirrup_angle_deg: 90.0,
///     design_shear_kn: 100.0,
///     factors: Default::default(),
/// };
///
/// let result = calculate(&input, ShearMethod::VariableStrut).expect("Calculation should succeed");
/// assert!(result.verified);
/// assert!((result.governing_capacity_kn - 761.19).abs() < 0.01);
/// ```
pub fn calculate(input: &ShearInput, method: ShearMethod) -> CalcResult<ShearResult> {
    // Validate inputs before any arithmetic
    input.validate()?;

    // === Reinforcement and stirrup geometry ===
    let asw = input.asw_cm2_per_m();
    let asw_over_s = asw / input.stirrup_spacing_cm;

    let alpha_rad = input.stirrup_angle_rad();
    let sin_alpha = alpha_rad.sin();
    let cot_alpha = cotangent(alpha_rad);

    // === Design strengths and strut inclination ===
    let fyd = input.factors.fyd_mpa(input.steel_fyk_mpa);
    let (fcd, cot_theta) = match method {
        ShearMethod::VariableStrut => (
            input.factors.fcd_mpa(input.concrete_fck_mpa),
            cotangent(input.strut_angle_rad()),
        ),
        // The simplified fcd skips the long-term coefficient
        ShearMethod::Simplified => (
            input.concrete_fck_mpa / input.factors.gamma_c,
            SIMPLIFIED_COT_THETA,
        ),
    };

    // === Equilibrium screening ===
    // A real balancing inclination exists only while ω_sw · sin α ≤ 1.
    let reinforcement_ratio = stirrup_mechanical_ratio(asw_over_s, fyd, input.web_width_cm, fcd);
    let radicand = strut_angle_radicand(reinforcement_ratio, sin_alpha);
    if radicand < 0.0 {
        return Err(CalcError::no_real_solution(
            reinforcement_ratio,
            "Transverse reinforcement too heavy for an equilibrium strut inclination",
        ));
    }
    let required_strut_angle_rad = required_strut_angle(radicand);

    // === Capacities ===
    // The cm/MPa unit mix produces hectonewtons; convert to kN for output.
    let (strut_hn, stirrup_hn) = match method {
        ShearMethod::VariableStrut => (
            strut_capacity(
                input.web_width_cm,
                input.effective_depth_cm,
                fcd,
                cot_alpha,
                cot_theta,
            ),
            stirrup_capacity(
                asw_over_s,
                fyd,
                input.effective_depth_cm,
                cot_alpha,
                cot_theta,
                sin_alpha,
            ),
        ),
        ShearMethod::Simplified => (
            strut_capacity_simplified(
                input.web_width_cm,
                input.effective_depth_cm,
                input.concrete_fck_mpa,
                fcd,
                cot_theta,
            ),
            stirrup_capacity_simplified(
                asw_over_s,
                input.steel_fyk_mpa,
                input.effective_depth_cm,
                input.factors.gamma_s,
            ),
        ),
    };

    let strut_capacity_kn = KiloNewtons::from(HectoNewtons::new(strut_hn)).value();
    let stirrup_capacity_kn = KiloNewtons::from(HectoNewtons::new(stirrup_hn)).value();
    let governing_capacity_kn = strut_capacity_kn.min(stirrup_capacity_kn);

    // === Verdict ===
    let verified = input.design_shear_kn <= governing_capacity_kn;
    let utilization = input.design_shear_kn / governing_capacity_kn;

    Ok(ShearResult {
        strut_capacity_kn,
        stirrup_capacity_kn,
        governing_capacity_kn,
        demand_kn: input.design_shear_kn,
        utilization,
        verified,
        asw_cm2_per_m: asw,
        reinforcement_ratio,
        required_strut_angle_rad,
        fcd_mpa: fcd,
        fyd_mpa: fyd,
        cot_theta,
        cot_alpha,
        method,
    })
}
