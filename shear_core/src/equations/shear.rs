//! # Truss-Analogy Shear Formulas
//!
//! Formulas for the shear resistance of rectangular reinforced-concrete
//! sections with transverse reinforcement, per the variable strut inclination
//! truss model of NTC 2018 and its fixed-inclination shortcut.
//!
//! ## Notation
//!
//! - `bw` = Web width (cm)
//! - `d` = Effective depth (cm)
//! - `Asw` = Transverse reinforcement area per meter of beam (cm²/m)
//! - `s` = Stirrup spacing (cm)
//! - `fcd`, `fyd` = Design strengths of concrete and stirrup steel (MPa)
//! - `θ` = Inclination of the compressed concrete struts
//! - `α` = Inclination of the stirrups (90° for vertical legs)
//!
//! Capacity formulas return **hectonewtons** because the cm/MPa unit mix
//! yields 100 N per cm²·MPa; callers convert to kN.
//!
//! ## References
//!
//! - NTC 2018 Section 4.1.2.3.5.2: members with transverse shear reinforcement
//! - EN 1992-1-1 Section 6.2.3, Eqs. (6.8) and (6.9)

use std::f64::consts::PI;

// =============================================================================
// REINFORCEMENT GEOMETRY
// =============================================================================

/// Calculate the cross-sectional area of a single round bar
///
/// # Formula
/// A = π × φ² / 4
///
/// # Arguments
/// * `diameter_mm` - Bar diameter in mm
///
/// # Returns
/// Bar area in mm²
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::bar_area_mm2;
///
/// // φ8 stirrup leg
/// let area = bar_area_mm2(8.0);
/// assert!((area - 50.265).abs() < 0.001);
/// ```
#[inline]
pub fn bar_area_mm2(diameter_mm: f64) -> f64 {
    PI * diameter_mm.powi(2) / 4.0
}

/// Calculate the transverse reinforcement area per meter of beam
///
/// A stirrup at spacing `s` repeats `100/s` times per meter, and each stirrup
/// crosses the shear crack with `legs` vertical legs:
///
/// ```text
///   ┌───────┐  ┌───────┐  ┌───────┐
///   │       │  │       │  │       │   two-legged stirrups
///   │       │  │       │  │       │   at spacing s
///   └───────┘  └───────┘  └───────┘
///   |<-- s -->|
/// ```
///
/// # Formula
/// Asw = (π × φ² / 4) × (100 / s) × legs / 100
///
/// The trailing ÷100 converts the per-leg mm² area into cm².
///
/// # Arguments
/// * `diameter_mm` - Stirrup bar diameter in mm
/// * `legs` - Number of legs per stirrup
/// * `spacing_cm` - Stirrup spacing in cm
///
/// # Returns
/// Reinforcement area in cm² per meter of beam
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::stirrup_area_per_meter;
///
/// // φ8 two-legged stirrups every 20 cm
/// let asw = stirrup_area_per_meter(8.0, 2, 20.0);
/// assert!((asw - 5.0265).abs() < 0.001);
/// ```
#[inline]
pub fn stirrup_area_per_meter(diameter_mm: f64, legs: u32, spacing_cm: f64) -> f64 {
    let stirrups_per_meter = 100.0 / spacing_cm;
    bar_area_mm2(diameter_mm) * stirrups_per_meter * f64::from(legs) / 100.0
}

// =============================================================================
// TRIGONOMETRY AND DESIGN STRENGTHS
// =============================================================================

/// Calculate the cotangent of an angle
///
/// # Formula
/// cot θ = 1 / tan θ
///
/// In IEEE arithmetic `tan(π/2)` is a huge finite number rather than
/// infinity, so `cotangent(π/2)` returns ~6e-17 instead of exactly zero.
/// That residue is below any structural significance and keeps the vertical
/// stirrup case (α = 90°) on the ordinary code path.
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::cotangent;
///
/// let cot = cotangent(45.0_f64.to_radians());
/// assert!((cot - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn cotangent(angle_rad: f64) -> f64 {
    1.0 / angle_rad.tan()
}

/// Calculate the design compressive strength of concrete
///
/// # Formula
/// fcd = α_cc × fck / γ_C
///
/// # Arguments
/// * `fck_mpa` - Characteristic cylinder strength in MPa
/// * `alpha_cc` - Long-term strength coefficient (0.85 per NTC 2018)
/// * `gamma_c` - Concrete partial factor (1.5 per NTC 2018)
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::design_compressive_strength;
///
/// let fcd = design_compressive_strength(35.0, 0.85, 1.5);
/// assert!((fcd - 19.8333).abs() < 0.001);
/// ```
///
/// # Reference
/// - NTC 2018 Section 4.1.2.1.1.1
#[inline]
pub fn design_compressive_strength(fck_mpa: f64, alpha_cc: f64, gamma_c: f64) -> f64 {
    alpha_cc * fck_mpa / gamma_c
}

/// Calculate the design yield strength of reinforcing steel
///
/// # Formula
/// fyd = fyk / γ_S
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::design_yield_strength;
///
/// let fyd = design_yield_strength(430.0, 1.15);
/// assert!((fyd - 373.913).abs() < 0.001);
/// ```
///
/// # Reference
/// - NTC 2018 Section 4.1.2.1.1.3
#[inline]
pub fn design_yield_strength(fyk_mpa: f64, gamma_s: f64) -> f64 {
    fyk_mpa / gamma_s
}

// =============================================================================
// VARIABLE STRUT INCLINATION TRUSS
// =============================================================================

/// Calculate the mechanical ratio of transverse reinforcement
///
/// Compares the yield force the stirrups can deliver per unit length against
/// the reduced compressive strength of the concrete web. Ratios approaching
/// 1.0 mean the web concrete, not the steel, limits the truss mechanism.
///
/// # Formula
/// ω_sw = (Asw / s × fyd) / (bw × 0.5 × fcd)
///
/// # Arguments
/// * `asw_over_s` - Reinforcement area per meter divided by spacing (cm²/m / cm)
/// * `fyd_mpa` - Design yield strength of the stirrups in MPa
/// * `web_width_cm` - Web width in cm
/// * `fcd_mpa` - Design compressive strength in MPa
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::stirrup_mechanical_ratio;
///
/// // φ8/20 cm two legs: Asw = 5.0265 cm²/m
/// let wsw = stirrup_mechanical_ratio(5.0265 / 20.0, 373.913, 23.0, 19.8333);
/// assert!((wsw - 0.412).abs() < 0.001);
/// ```
#[inline]
pub fn stirrup_mechanical_ratio(
    asw_over_s: f64,
    fyd_mpa: f64,
    web_width_cm: f64,
    fcd_mpa: f64,
) -> f64 {
    (asw_over_s * fyd_mpa) / (web_width_cm * 0.5 * fcd_mpa)
}

/// Calculate the radicand of the required strut inclination equation
///
/// Setting stirrup capacity equal to strut capacity and solving for the strut
/// inclination gives cot θ = √(1/(ω_sw × sin α) − 1). This function returns
/// the quantity under that square root; a negative value means the section is
/// so heavily reinforced that no real inclination balances the two mechanisms.
///
/// # Formula
/// radicand = 1 / (ω_sw × sin α) − 1
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::strut_angle_radicand;
///
/// let radicand = strut_angle_radicand(0.412, 1.0);
/// assert!((radicand - 1.4272).abs() < 0.001);
///
/// // Over-reinforced: ω_sw > 1 leaves nothing to take the root of
/// assert!(strut_angle_radicand(1.6, 1.0) < 0.0);
/// ```
#[inline]
pub fn strut_angle_radicand(mechanical_ratio: f64, sin_alpha: f64) -> f64 {
    1.0 / (mechanical_ratio * sin_alpha) - 1.0
}

/// Calculate the required strut inclination from a non-negative radicand
///
/// Takes the arctangent of the root of [`strut_angle_radicand`]. The caller
/// must screen the radicand for sign first; a negative input produces NaN.
///
/// # Formula
/// θ_calc = atan(√radicand)
///
/// # Returns
/// Strut inclination in radians
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::required_strut_angle;
///
/// let theta = required_strut_angle(1.4272);
/// assert!((theta - 0.8738).abs() < 0.001);
/// ```
#[inline]
pub fn required_strut_angle(radicand: f64) -> f64 {
    radicand.sqrt().atan()
}

/// Calculate the shear-compression capacity (concrete strut crushing)
///
/// The compressed web concrete forms inclined struts between shear cracks:
///
/// ```text
///    ═══════════════════════════  compression chord
///      ╲    ╲    ╲    ╲    ╲
///       ╲    ╲    ╲    ╲    ╲     struts at inclination θ
///        ╲    ╲    ╲    ╲    ╲
///    ═══════════════════════════  tension chord
/// ```
///
/// # Formula
/// Vrd,c = 0.9 × d × bw × 0.5 × fcd × (cot α + cot θ) / (1 + cot²θ)
///
/// The 0.9·d term is the internal lever arm; 0.5·fcd is the reduced strut
/// strength f'cd of NTC 2018.
///
/// # Arguments
/// * `web_width_cm` - Web width in cm
/// * `effective_depth_cm` - Effective depth in cm
/// * `fcd_mpa` - Design compressive strength in MPa
/// * `cot_alpha` - Cotangent of the stirrup inclination
/// * `cot_theta` - Cotangent of the strut inclination
///
/// # Returns
/// Shear-compression capacity in hectonewtons
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::strut_capacity;
///
/// // bw = 23 cm, d = 90 cm, fcd = 19.8333 MPa, θ = 45°, α = 90°
/// let vrd_c = strut_capacity(23.0, 90.0, 19.8333, 0.0, 1.0);
/// assert!((vrd_c / 10.0 - 923.74).abs() < 0.01);
/// ```
///
/// # Reference
/// - NTC 2018 Section 4.1.2.3.5.2 / EN 1992-1-1 Eq. (6.9)
#[inline]
pub fn strut_capacity(
    web_width_cm: f64,
    effective_depth_cm: f64,
    fcd_mpa: f64,
    cot_alpha: f64,
    cot_theta: f64,
) -> f64 {
    0.9 * effective_depth_cm * web_width_cm * 0.5 * fcd_mpa * (cot_alpha + cot_theta)
        / (1.0 + cot_theta.powi(2))
}

/// Calculate the shear-tension capacity (stirrup yielding)
///
/// # Formula
/// Vrd,s = (Asw / s) × fyd × 0.9 × d × (cot α + cot θ) × sin α
///
/// # Arguments
/// * `asw_over_s` - Reinforcement area per meter divided by spacing (cm²/m / cm)
/// * `fyd_mpa` - Design yield strength of the stirrups in MPa
/// * `effective_depth_cm` - Effective depth in cm
/// * `cot_alpha` - Cotangent of the stirrup inclination
/// * `cot_theta` - Cotangent of the strut inclination
/// * `sin_alpha` - Sine of the stirrup inclination
///
/// # Returns
/// Shear-tension capacity in hectonewtons
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::stirrup_capacity;
///
/// // φ8/20 two legs, fyd = 373.913 MPa, d = 90 cm, θ = 45°, α = 90°
/// let vrd_s = stirrup_capacity(5.026548 / 20.0, 373.913, 90.0, 0.0, 1.0, 1.0);
/// assert!((vrd_s / 10.0 - 761.19).abs() < 0.01);
/// ```
///
/// # Reference
/// - NTC 2018 Section 4.1.2.3.5.2 / EN 1992-1-1 Eq. (6.8)
#[inline]
pub fn stirrup_capacity(
    asw_over_s: f64,
    fyd_mpa: f64,
    effective_depth_cm: f64,
    cot_alpha: f64,
    cot_theta: f64,
    sin_alpha: f64,
) -> f64 {
    asw_over_s * fyd_mpa * 0.9 * effective_depth_cm * (cot_alpha + cot_theta) * sin_alpha
}

// =============================================================================
// FIXED-INCLINATION SHORTCUT
// =============================================================================

/// Strut cotangent assumed by the fixed-inclination method (θ ≈ 39.8°)
pub const SIMPLIFIED_COT_THETA: f64 = 1.2;

/// Calculate the maximum shear capacity for the fixed-inclination method
///
/// Conservative strut-crushing check with the strength reduction
/// ν = 0.6 × (1 − fck/250) and the lever arm folded into a single 0.54
/// coefficient (0.9 × 0.6 = 0.54). Vertical stirrups are assumed.
///
/// # Formula
/// Vrd,max = 0.54 × (1 − fck/250) × bw × d × fcd / (cot θ + tan θ)
///
/// # Arguments
/// * `web_width_cm` - Web width in cm
/// * `effective_depth_cm` - Effective depth in cm
/// * `fck_mpa` - Characteristic strength in MPa (enters the ν reduction)
/// * `fcd_mpa` - Design compressive strength in MPa
/// * `cot_theta` - Cotangent of the assumed strut inclination
///
/// # Returns
/// Maximum shear capacity in hectonewtons
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::{strut_capacity_simplified, SIMPLIFIED_COT_THETA};
///
/// // bw = 30 cm, d = 50 cm, C30/37 with fcd = 20 MPa
/// let vrd_max = strut_capacity_simplified(30.0, 50.0, 30.0, 20.0, SIMPLIFIED_COT_THETA);
/// assert!((vrd_max / 10.0 - 701.11).abs() < 0.01);
/// ```
///
/// # Reference
/// - EN 1992-1-1 Eq. (6.9) with ν per Eq. (6.6N)
#[inline]
pub fn strut_capacity_simplified(
    web_width_cm: f64,
    effective_depth_cm: f64,
    fck_mpa: f64,
    fcd_mpa: f64,
    cot_theta: f64,
) -> f64 {
    let tan_theta = 1.0 / cot_theta;
    0.54 * (1.0 - fck_mpa / 250.0) * web_width_cm * effective_depth_cm * fcd_mpa
        / (cot_theta + tan_theta)
}

/// Calculate the stirrup capacity for the fixed-inclination method
///
/// Conservative shortcut that keeps the characteristic yield strength over
/// γ_S and drops the lever-arm and cot θ multipliers (0.9 × 1.2 ≈ 1.08,
/// rounded down to 1.0). Vertical stirrups are assumed.
///
/// # Formula
/// Vrd,s = (Asw / s) × fyk × d / γ_S
///
/// # Arguments
/// * `asw_over_s` - Reinforcement area per meter divided by spacing (cm²/m / cm)
/// * `fyk_mpa` - Characteristic yield strength of the stirrups in MPa
/// * `effective_depth_cm` - Effective depth in cm
/// * `gamma_s` - Steel partial factor
///
/// # Returns
/// Stirrup capacity in hectonewtons
///
/// # Example
/// ```rust
/// use shear_core::equations::shear::stirrup_capacity_simplified;
///
/// // Asw = 5 cm²/m at s = 15 cm, B450C stirrups, d = 50 cm
/// let vrd_s = stirrup_capacity_simplified(5.0 / 15.0, 450.0, 50.0, 1.15);
/// assert!((vrd_s / 10.0 - 652.17).abs() < 0.01);
/// ```
#[inline]
pub fn stirrup_capacity_simplified(
    asw_over_s: f64,
    fyk_mpa: f64,
    effective_depth_cm: f64,
    gamma_s: f64,
) -> f64 {
    asw_over_s * fyk_mpa * effective_depth_cm / gamma_s
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_bar_area() {
        // φ8: π × 64 / 4 = 50.265 mm²
        let a = bar_area_mm2(8.0);
        assert!(approx_eq(a, 50.265), "A = {} (expected 50.265)", a);

        // φ12: π × 144 / 4 = 113.097 mm²
        let a12 = bar_area_mm2(12.0);
        assert!(approx_eq(a12, 113.097), "A = {} (expected 113.097)", a12);
    }

    #[test]
    fn test_stirrup_area_per_meter() {
        // φ8 two legs at 20 cm: 50.265 × 5 × 2 / 100 = 5.0265 cm²/m
        let asw = stirrup_area_per_meter(8.0, 2, 20.0);
        assert!(approx_eq(asw, 5.0265), "Asw = {} (expected 5.0265)", asw);

        // Halving the spacing doubles the area per meter
        let asw_half = stirrup_area_per_meter(8.0, 2, 10.0);
        assert!(approx_eq(asw_half, 2.0 * asw), "Asw = {}", asw_half);
    }

    #[test]
    fn test_cotangent() {
        assert!(approx_eq(cotangent(45.0_f64.to_radians()), 1.0));
        // cot 90° collapses to machine epsilon scale, not a division blowup
        let cot90 = cotangent(90.0_f64.to_radians());
        assert!(cot90.abs() < 1e-15, "cot 90° = {}", cot90);
        // cot 22° ≈ 2.475, the NTC upper bound region
        assert!(approx_eq(cotangent(22.0_f64.to_radians()), 2.475));
    }

    #[test]
    fn test_design_strengths() {
        assert!(approx_eq(design_compressive_strength(35.0, 0.85, 1.5), 19.8333));
        assert!(approx_eq(design_compressive_strength(30.0, 1.0, 1.5), 20.0));
        assert!(approx_eq(design_yield_strength(430.0, 1.15), 373.913));
        assert!(approx_eq(design_yield_strength(450.0, 1.15), 391.304));
    }

    #[test]
    fn test_mechanical_ratio_and_radicand() {
        let asw = stirrup_area_per_meter(8.0, 2, 20.0);
        let fyd = design_yield_strength(430.0, 1.15);
        let fcd = design_compressive_strength(35.0, 0.85, 1.5);

        let wsw = stirrup_mechanical_ratio(asw / 20.0, fyd, 23.0, fcd);
        assert!(approx_eq(wsw, 0.4120), "wsw = {} (expected 0.4120)", wsw);

        let radicand = strut_angle_radicand(wsw, 1.0);
        assert!(approx_eq(radicand, 1.4271), "radicand = {}", radicand);

        let theta = required_strut_angle(radicand);
        assert!(approx_eq(theta, 0.8738), "theta = {}", theta);
    }

    #[test]
    fn test_radicand_sign_flips_when_over_reinforced() {
        // ω_sw × sin α > 1 has no real inclination solution
        assert!(strut_angle_radicand(1.01, 1.0) < 0.0);
        assert!(strut_angle_radicand(0.99, 1.0) > 0.0);
        // Inclined stirrups shrink the effective ratio
        assert!(strut_angle_radicand(1.2, 0.5) > 0.0);
    }

    #[test]
    fn test_strut_capacity_baseline() {
        // bw = 23, d = 90, fcd = 19.8333, θ = 45°, α = 90°
        let fcd = design_compressive_strength(35.0, 0.85, 1.5);
        let cot_theta = cotangent(45.0_f64.to_radians());
        let cot_alpha = cotangent(90.0_f64.to_radians());

        let vrd_c = strut_capacity(23.0, 90.0, fcd, cot_alpha, cot_theta);
        assert!(
            approx_eq(vrd_c / 10.0, 923.74),
            "Vrd_c = {} kN (expected 923.74)",
            vrd_c / 10.0
        );
    }

    #[test]
    fn test_stirrup_capacity_baseline() {
        let asw = stirrup_area_per_meter(8.0, 2, 20.0);
        let fyd = design_yield_strength(430.0, 1.15);

        let vrd_s = stirrup_capacity(asw / 20.0, fyd, 90.0, 0.0, 1.0, 1.0);
        assert!(
            approx_eq(vrd_s / 10.0, 761.19),
            "Vrd_s = {} kN (expected 761.19)",
            vrd_s / 10.0
        );
    }

    #[test]
    fn test_flatter_struts_trade_strut_for_stirrup_capacity() {
        let fcd = design_compressive_strength(30.0, 0.85, 1.5);
        let fyd = design_yield_strength(450.0, 1.15);
        let asw_over_s = 5.0 / 15.0;

        // cot θ = 1.0 (45°) vs cot θ = 2.5 (21.8°)
        let strut_steep = strut_capacity(30.0, 50.0, fcd, 0.0, 1.0);
        let strut_flat = strut_capacity(30.0, 50.0, fcd, 0.0, 2.5);
        assert!(strut_flat < strut_steep, "flatter struts crush sooner");

        let stirrup_steep = stirrup_capacity(asw_over_s, fyd, 50.0, 0.0, 1.0, 1.0);
        let stirrup_flat = stirrup_capacity(asw_over_s, fyd, 50.0, 0.0, 2.5, 1.0);
        assert!(stirrup_flat > stirrup_steep, "flatter struts engage more stirrups");
    }

    #[test]
    fn test_simplified_capacities() {
        // bw = 30, d = 50, fck = 30, fcd = fck/1.5 = 20
        let vrd_max = strut_capacity_simplified(30.0, 50.0, 30.0, 20.0, SIMPLIFIED_COT_THETA);
        assert!(
            approx_eq(vrd_max / 10.0, 701.11),
            "Vrd_max = {} kN (expected 701.11)",
            vrd_max / 10.0
        );

        let vrd_s = stirrup_capacity_simplified(5.0 / 15.0, 450.0, 50.0, 1.15);
        assert!(
            approx_eq(vrd_s / 10.0, 652.17),
            "Vrd_s = {} kN (expected 652.17)",
            vrd_s / 10.0
        );
    }

    #[test]
    fn test_simplified_nu_reduction_vanishes_at_250_mpa() {
        // The ν term zeroes the strut capacity as fck approaches 250 MPa
        let vrd = strut_capacity_simplified(30.0, 50.0, 250.0, 20.0, SIMPLIFIED_COT_THETA);
        assert!(vrd.abs() < 1e-9, "Vrd_max = {}", vrd);
    }
}
