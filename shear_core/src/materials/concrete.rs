//! Concrete Strength Classes (NTC 2018 Tab. 4.1.I)
//!
//! Strength classes for normal-weight structural concrete, named by
//! characteristic cylinder/cube strength (e.g., C25/30 = 25 MPa cylinder,
//! 30 MPa cube).
//!
//! Derived mechanical properties follow the EN 1992-1-1 Table 3.1
//! correlations for classes up to C50/60:
//!
//! ```text
//! fcm  = fck + 8                  (mean compressive strength, MPa)
//! fctm = 0.30 × fck^(2/3)         (mean tensile strength, MPa)
//! Ecm  = 22000 × (fcm / 10)^0.3   (secant elastic modulus, MPa)
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Standard concrete strength class
///
/// The class label pairs the characteristic cylinder strength fck with the
/// characteristic cube strength Rck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConcreteClass {
    /// C16/20 (minimum for reinforced concrete per NTC 2018)
    #[serde(rename = "C16/20")]
    C16_20,
    /// C20/25
    #[serde(rename = "C20/25")]
    C20_25,
    /// C25/30
    #[default]
    #[serde(rename = "C25/30")]
    C25_30,
    /// C28/35
    #[serde(rename = "C28/35")]
    C28_35,
    /// C30/37
    #[serde(rename = "C30/37")]
    C30_37,
    /// C32/40
    #[serde(rename = "C32/40")]
    C32_40,
    /// C35/45
    #[serde(rename = "C35/45")]
    C35_45,
    /// C40/50
    #[serde(rename = "C40/50")]
    C40_50,
    /// C45/55
    #[serde(rename = "C45/55")]
    C45_55,
    /// C50/60
    #[serde(rename = "C50/60")]
    C50_60,
}

impl ConcreteClass {
    /// All strength classes for UI selection (ascending strength)
    pub const ALL: [ConcreteClass; 10] = [
        ConcreteClass::C16_20,
        ConcreteClass::C20_25,
        ConcreteClass::C25_30,
        ConcreteClass::C28_35,
        ConcreteClass::C30_37,
        ConcreteClass::C32_40,
        ConcreteClass::C35_45,
        ConcreteClass::C40_50,
        ConcreteClass::C45_55,
        ConcreteClass::C50_60,
    ];

    /// Characteristic cylinder strength fck in MPa
    pub fn fck_mpa(&self) -> f64 {
        match self {
            ConcreteClass::C16_20 => 16.0,
            ConcreteClass::C20_25 => 20.0,
            ConcreteClass::C25_30 => 25.0,
            ConcreteClass::C28_35 => 28.0,
            ConcreteClass::C30_37 => 30.0,
            ConcreteClass::C32_40 => 32.0,
            ConcreteClass::C35_45 => 35.0,
            ConcreteClass::C40_50 => 40.0,
            ConcreteClass::C45_55 => 45.0,
            ConcreteClass::C50_60 => 50.0,
        }
    }

    /// Characteristic cube strength Rck in MPa
    pub fn rck_mpa(&self) -> f64 {
        match self {
            ConcreteClass::C16_20 => 20.0,
            ConcreteClass::C20_25 => 25.0,
            ConcreteClass::C25_30 => 30.0,
            ConcreteClass::C28_35 => 35.0,
            ConcreteClass::C30_37 => 37.0,
            ConcreteClass::C32_40 => 40.0,
            ConcreteClass::C35_45 => 45.0,
            ConcreteClass::C40_50 => 50.0,
            ConcreteClass::C45_55 => 55.0,
            ConcreteClass::C50_60 => 60.0,
        }
    }

    /// Mean compressive strength fcm = fck + 8 in MPa
    pub fn fcm_mpa(&self) -> f64 {
        self.fck_mpa() + 8.0
    }

    /// Mean tensile strength fctm = 0.30 × fck^(2/3) in MPa
    pub fn fctm_mpa(&self) -> f64 {
        0.30 * self.fck_mpa().powf(2.0 / 3.0)
    }

    /// Secant elastic modulus Ecm = 22000 × (fcm/10)^0.3 in MPa
    pub fn ecm_mpa(&self) -> f64 {
        22_000.0 * (self.fcm_mpa() / 10.0).powf(0.3)
    }

    /// Full derived property set for this class
    pub fn properties(&self) -> ConcreteProperties {
        ConcreteProperties {
            class: *self,
            fck_mpa: self.fck_mpa(),
            rck_mpa: self.rck_mpa(),
            fcm_mpa: self.fcm_mpa(),
            fctm_mpa: self.fctm_mpa(),
            ecm_mpa: self.ecm_mpa(),
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.to_uppercase().replace([' ', '-', '_'], "/");
        match normalized.trim_start_matches('C') {
            "16/20" | "16" => Ok(ConcreteClass::C16_20),
            "20/25" | "20" => Ok(ConcreteClass::C20_25),
            "25/30" | "25" => Ok(ConcreteClass::C25_30),
            "28/35" | "28" => Ok(ConcreteClass::C28_35),
            "30/37" | "30" => Ok(ConcreteClass::C30_37),
            "32/40" | "32" => Ok(ConcreteClass::C32_40),
            "35/45" | "35" => Ok(ConcreteClass::C35_45),
            "40/50" | "40" => Ok(ConcreteClass::C40_50),
            "45/55" | "45" => Ok(ConcreteClass::C45_55),
            "50/60" | "50" => Ok(ConcreteClass::C50_60),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name (e.g., "C25/30")
    pub fn display_name(&self) -> &'static str {
        match self {
            ConcreteClass::C16_20 => "C16/20",
            ConcreteClass::C20_25 => "C20/25",
            ConcreteClass::C25_30 => "C25/30",
            ConcreteClass::C28_35 => "C28/35",
            ConcreteClass::C30_37 => "C30/37",
            ConcreteClass::C32_40 => "C32/40",
            ConcreteClass::C35_45 => "C35/45",
            ConcreteClass::C40_50 => "C40/50",
            ConcreteClass::C45_55 => "C45/55",
            ConcreteClass::C50_60 => "C50/60",
        }
    }
}

impl std::fmt::Display for ConcreteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Derived mechanical properties for a concrete class
///
/// All values are in MPa. These are characteristic/mean properties before
/// partial factors are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Strength class
    pub class: ConcreteClass,
    /// Characteristic cylinder strength (MPa)
    pub fck_mpa: f64,
    /// Characteristic cube strength (MPa)
    pub rck_mpa: f64,
    /// Mean compressive strength (MPa)
    pub fcm_mpa: f64,
    /// Mean tensile strength (MPa)
    pub fctm_mpa: f64,
    /// Secant elastic modulus (MPa)
    pub ecm_mpa: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_strengths() {
        assert_eq!(ConcreteClass::C25_30.fck_mpa(), 25.0);
        assert_eq!(ConcreteClass::C25_30.rck_mpa(), 30.0);
        assert_eq!(ConcreteClass::C35_45.fck_mpa(), 35.0);
        assert_eq!(ConcreteClass::C50_60.rck_mpa(), 60.0);
    }

    #[test]
    fn test_derived_properties() {
        let props = ConcreteClass::C35_45.properties();
        assert_eq!(props.fcm_mpa, 43.0);
        // fctm = 0.30 × 35^(2/3) ≈ 3.21 MPa
        assert!((props.fctm_mpa - 3.21).abs() < 0.01);
        // Ecm = 22000 × 4.3^0.3 ≈ 34077 MPa (tabulated as 34 GPa)
        assert!((props.ecm_mpa - 34_077.0).abs() < 50.0);
    }

    #[test]
    fn test_all_classes_ascending() {
        for pair in ConcreteClass::ALL.windows(2) {
            assert!(pair[0].fck_mpa() < pair[1].fck_mpa());
            assert!(pair[0].rck_mpa() < pair[1].rck_mpa());
        }
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            ConcreteClass::from_str_flexible("C25/30").unwrap(),
            ConcreteClass::C25_30
        );
        assert_eq!(
            ConcreteClass::from_str_flexible("c35-45").unwrap(),
            ConcreteClass::C35_45
        );
        assert_eq!(
            ConcreteClass::from_str_flexible("30").unwrap(),
            ConcreteClass::C30_37
        );
        assert!(ConcreteClass::from_str_flexible("C99/110").is_err());
    }

    #[test]
    fn test_serialization() {
        let class = ConcreteClass::C35_45;
        let json = serde_json::to_string(&class).unwrap();
        assert_eq!(json, "\"C35/45\"");

        let parsed: ConcreteClass = serde_json::from_str(&json).unwrap();
        assert_eq!(class, parsed);
    }
}
