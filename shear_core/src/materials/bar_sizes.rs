//! Standard Reinforcing Bar Sizes
//!
//! Nominal bar diameters in the metric series used for stirrups and
//! longitudinal reinforcement. Cross-section areas follow from the
//! nominal diameter; ribbing is ignored.
//!
//! # Example
//!
//! ```
//! use shear_core::materials::BarSize;
//!
//! let bar = BarSize::Phi8;
//! assert!((bar.area_mm2() - 50.265).abs() < 0.001);
//! assert_eq!(bar.display_name(), "φ8");
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::shear::bar_area_mm2;
use crate::errors::{CalcError, CalcResult};

/// Nominal reinforcing bar diameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarSize {
    /// φ5 (B450A only)
    Phi5,
    /// φ6
    Phi6,
    /// φ8 (most common stirrup diameter)
    #[default]
    Phi8,
    /// φ10
    Phi10,
    /// φ12
    Phi12,
    /// φ14
    Phi14,
    /// φ16
    Phi16,
}

impl BarSize {
    /// All bar sizes in ascending diameter order
    pub const ALL: [BarSize; 7] = [
        BarSize::Phi5,
        BarSize::Phi6,
        BarSize::Phi8,
        BarSize::Phi10,
        BarSize::Phi12,
        BarSize::Phi14,
        BarSize::Phi16,
    ];

    /// Diameters commonly bent into stirrups
    pub const STIRRUP_SIZES: [BarSize; 5] = [
        BarSize::Phi5,
        BarSize::Phi6,
        BarSize::Phi8,
        BarSize::Phi10,
        BarSize::Phi12,
    ];

    /// Nominal diameter in mm
    pub fn diameter_mm(&self) -> f64 {
        match self {
            BarSize::Phi5 => 5.0,
            BarSize::Phi6 => 6.0,
            BarSize::Phi8 => 8.0,
            BarSize::Phi10 => 10.0,
            BarSize::Phi12 => 12.0,
            BarSize::Phi14 => 14.0,
            BarSize::Phi16 => 16.0,
        }
    }

    /// Cross-section area of a single bar in mm²
    pub fn area_mm2(&self) -> f64 {
        bar_area_mm2(self.diameter_mm())
    }

    /// Cross-section area of a single bar in cm²
    pub fn area_cm2(&self) -> f64 {
        self.area_mm2() / 100.0
    }

    /// Find the bar size matching a nominal diameter in mm
    pub fn from_diameter_mm(diameter_mm: f64) -> CalcResult<Self> {
        BarSize::ALL
            .iter()
            .copied()
            .find(|size| (size.diameter_mm() - diameter_mm).abs() < 0.01)
            .ok_or_else(|| CalcError::material_not_found(format!("φ{diameter_mm}")))
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BarSize::Phi5 => "φ5",
            BarSize::Phi6 => "φ6",
            BarSize::Phi8 => "φ8",
            BarSize::Phi10 => "φ10",
            BarSize::Phi12 => "φ12",
            BarSize::Phi14 => "φ14",
            BarSize::Phi16 => "φ16",
        }
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_areas() {
        assert!((BarSize::Phi8.area_mm2() - 50.265).abs() < 0.001);
        assert!((BarSize::Phi12.area_mm2() - 113.097).abs() < 0.001);
        assert!((BarSize::Phi16.area_mm2() - 201.062).abs() < 0.001);
    }

    #[test]
    fn test_area_unit_conversion() {
        for size in BarSize::ALL {
            assert!((size.area_cm2() * 100.0 - size.area_mm2()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sizes_ascending() {
        for pair in BarSize::ALL.windows(2) {
            assert!(
                pair[0].diameter_mm() < pair[1].diameter_mm(),
                "ALL must be sorted by diameter"
            );
        }
    }

    #[test]
    fn test_from_diameter() {
        assert_eq!(BarSize::from_diameter_mm(8.0).unwrap(), BarSize::Phi8);
        assert_eq!(BarSize::from_diameter_mm(14.0).unwrap(), BarSize::Phi14);
        assert!(BarSize::from_diameter_mm(7.0).is_err());
    }

    #[test]
    fn test_stirrup_sizes_subset() {
        for size in BarSize::STIRRUP_SIZES {
            assert!(BarSize::ALL.contains(&size));
            assert!(size.diameter_mm() <= 12.0);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(BarSize::Phi8.to_string(), "φ8");
        assert_eq!(BarSize::default(), BarSize::Phi8);
    }
}
