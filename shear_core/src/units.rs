//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Reinforced-concrete design uses a consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! The engine uses the metric conventions of Italian practice (NTC 2018):
//! - Section dimensions: centimeters (cm)
//! - Bar diameters: millimeters (mm)
//! - Stress: megapascals (MPa = N/mm²)
//! - Force: kilonewtons (kN)
//! - Reinforcement area: square centimeters (cm²)
//!
//! Mixing cm² with MPa in a capacity product yields hectonewtons
//! (1 cm² · 1 MPa = 100 N), so [`HectoNewtons`] exists purely as the
//! intermediate of those products before conversion to [`KiloNewtons`].
//!
//! ## Example
//!
//! ```rust
//! use shear_core::units::{Centimeters, Millimeters, HectoNewtons, KiloNewtons};
//!
//! let cover = Millimeters(40.0);
//! let cover_cm: Centimeters = cover.into();
//! assert_eq!(cover_cm.0, 4.0);
//!
//! let capacity = HectoNewtons(9237.5);
//! let capacity_kn: KiloNewtons = capacity.into();
//! assert_eq!(capacity_kn.0, 923.75);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * 10.0)
    }
}

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Force in hectonewtons (1 hN = 100 N = 0.1 kN)
///
/// Capacity products of cm² areas and MPa stresses land in this unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HectoNewtons(pub f64);

impl From<HectoNewtons> for KiloNewtons {
    fn from(hn: HectoNewtons) -> Self {
        KiloNewtons(hn.0 / 10.0)
    }
}

impl From<KiloNewtons> for HectoNewtons {
    fn from(kn: KiloNewtons) -> Self {
        HectoNewtons(kn.0 * 10.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

// ============================================================================
// Area Units
// ============================================================================

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareCentimeters(pub f64);

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

impl From<SquareMillimeters> for SquareCentimeters {
    fn from(mm2: SquareMillimeters) -> Self {
        SquareCentimeters(mm2.0 / 100.0)
    }
}

impl From<SquareCentimeters> for SquareMillimeters {
    fn from(cm2: SquareCentimeters) -> Self {
        SquareMillimeters(cm2.0 * 100.0)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Plane angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Plane angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(HectoNewtons);
impl_arithmetic!(Mpa);
impl_arithmetic!(SquareCentimeters);
impl_arithmetic!(SquareMillimeters);
impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_centimeters() {
        let mm = Millimeters(80.0);
        let cm: Centimeters = mm.into();
        assert_eq!(cm.0, 8.0);
    }

    #[test]
    fn test_hectonewtons_to_kilonewtons() {
        let hn = HectoNewtons(9237.5);
        let kn: KiloNewtons = hn.into();
        assert_eq!(kn.0, 923.75);
    }

    #[test]
    fn test_degrees_to_radians() {
        let deg = Degrees(180.0);
        let rad: Radians = deg.into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);

        let back: Degrees = rad.into();
        assert!((back.0 - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_unit_conversion() {
        let mm2 = SquareMillimeters(50.27);
        let cm2: SquareCentimeters = mm2.into();
        assert!((cm2.0 - 0.5027).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Centimeters(23.0);
        let b = Centimeters(7.0);
        assert_eq!((a + b).0, 30.0);
        assert_eq!((a - b).0, 16.0);
        assert_eq!((a * 2.0).0, 46.0);
        assert_eq!((a / 2.0).0, 11.5);
    }

    #[test]
    fn test_serialization() {
        let kn = KiloNewtons(100.0);
        let json = serde_json::to_string(&kn).unwrap();
        assert_eq!(json, "100.0");

        let roundtrip: KiloNewtons = serde_json::from_str(&json).unwrap();
        assert_eq!(kn, roundtrip);
    }
}
