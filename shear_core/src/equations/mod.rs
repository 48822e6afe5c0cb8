//! # Shear Design Equations
//!
//! This module contains all fundamental formulas used in the shear verification.
//! Having equations in one place enables:
//! - Easy verification against code references (NTC 2018, EN 1992-1-1)
//! - Documentation of assumptions and unit conventions
//! - Consistent implementation across calculation methods
//!
//! ## Modules
//!
//! - [`shear`] - Truss-analogy shear formulas (reinforcement area, design
//!   strengths, strut inclination, capacities)
//!
//! ## Unit Conventions
//!
//! - **Lengths**: centimeters (section), millimeters (bar diameters)
//! - **Stresses**: MPa
//! - **Capacity products**: hectonewtons (cm² × MPa = 100 N), converted to kN
//!   by the calculation layer
//! - **Angles**: radians inside every formula; degree conversion happens at
//!   the calculation boundary
//!
//! ## References
//!
//! - NTC 2018 (D.M. 17/01/2018): Norme Tecniche per le Costruzioni
//! - EN 1992-1-1:2004 (Eurocode 2), Section 6.2.3
//! - Circolare 21/01/2019 n. 7 (NTC commentary)

pub mod shear;

// Re-export commonly used items
pub use shear::{
    // Reinforcement geometry
    bar_area_mm2,
    stirrup_area_per_meter,
    // Trigonometry and design strengths
    cotangent,
    design_compressive_strength,
    design_yield_strength,
    // Variable-inclination truss
    stirrup_mechanical_ratio,
    strut_angle_radicand,
    required_strut_angle,
    strut_capacity,
    stirrup_capacity,
    // Fixed-inclination shortcut
    strut_capacity_simplified,
    stirrup_capacity_simplified,
    SIMPLIFIED_COT_THETA,
};
