//! Reinforcing Steel Grades (NTC 2018 §11.3.2)
//!
//! Weldable ribbed bar grades for reinforced concrete. New designs use
//! B450C (high ductility) or B450A (normal ductility, small diameters);
//! the FeB grades of the pre-2008 codes are kept for the assessment of
//! existing structures.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Reinforcing steel grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RebarGrade {
    /// B450C: fyk = 450 MPa, high ductility (current standard grade)
    #[default]
    B450C,
    /// B450A: fyk = 450 MPa, normal ductility, diameters 5-10 mm
    B450A,
    /// FeB38k: fyk = 375 MPa (legacy, D.M. 1996 era)
    FeB38k,
    /// FeB44k: fyk = 430 MPa (legacy, D.M. 1996 era)
    FeB44k,
}

impl RebarGrade {
    /// All rebar grades for UI selection
    pub const ALL: [RebarGrade; 4] = [
        RebarGrade::B450C,
        RebarGrade::B450A,
        RebarGrade::FeB38k,
        RebarGrade::FeB44k,
    ];

    /// Characteristic yield strength fyk in MPa
    pub fn fyk_mpa(&self) -> f64 {
        match self {
            RebarGrade::B450C => 450.0,
            RebarGrade::B450A => 450.0,
            RebarGrade::FeB38k => 375.0,
            RebarGrade::FeB44k => 430.0,
        }
    }

    /// Characteristic tensile strength ftk in MPa
    pub fn ftk_mpa(&self) -> f64 {
        match self {
            RebarGrade::B450C => 540.0,
            RebarGrade::B450A => 540.0,
            RebarGrade::FeB38k => 450.0,
            RebarGrade::FeB44k => 540.0,
        }
    }

    /// Whether this is a legacy grade (existing structures only)
    pub fn is_legacy(&self) -> bool {
        matches!(self, RebarGrade::FeB38k | RebarGrade::FeB44k)
    }

    /// Full property set for this grade
    pub fn properties(&self) -> RebarProperties {
        RebarProperties {
            grade: *self,
            fyk_mpa: self.fyk_mpa(),
            ftk_mpa: self.ftk_mpa(),
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "B450C" => Ok(RebarGrade::B450C),
            "B450A" => Ok(RebarGrade::B450A),
            "FEB38K" | "FEB38" => Ok(RebarGrade::FeB38k),
            "FEB44K" | "FEB44" => Ok(RebarGrade::FeB44k),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RebarGrade::B450C => "B450C",
            RebarGrade::B450A => "B450A",
            RebarGrade::FeB38k => "FeB38k",
            RebarGrade::FeB44k => "FeB44k",
        }
    }
}

impl std::fmt::Display for RebarGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Characteristic strengths for a rebar grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarProperties {
    /// Steel grade
    pub grade: RebarGrade,
    /// Characteristic yield strength (MPa)
    pub fyk_mpa: f64,
    /// Characteristic tensile strength (MPa)
    pub ftk_mpa: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_strengths() {
        assert_eq!(RebarGrade::B450C.fyk_mpa(), 450.0);
        assert_eq!(RebarGrade::B450C.ftk_mpa(), 540.0);
        assert_eq!(RebarGrade::FeB38k.fyk_mpa(), 375.0);
        assert_eq!(RebarGrade::FeB44k.fyk_mpa(), 430.0);
    }

    #[test]
    fn test_legacy_flag() {
        assert!(!RebarGrade::B450C.is_legacy());
        assert!(!RebarGrade::B450A.is_legacy());
        assert!(RebarGrade::FeB38k.is_legacy());
        assert!(RebarGrade::FeB44k.is_legacy());
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            RebarGrade::from_str_flexible("b450c").unwrap(),
            RebarGrade::B450C
        );
        assert_eq!(
            RebarGrade::from_str_flexible("B 450 C").unwrap(),
            RebarGrade::B450C
        );
        assert_eq!(
            RebarGrade::from_str_flexible("FeB44k").unwrap(),
            RebarGrade::FeB44k
        );
        assert!(RebarGrade::from_str_flexible("S355").is_err());
    }

    #[test]
    fn test_serialization() {
        let grade = RebarGrade::FeB44k;
        let json = serde_json::to_string(&grade).unwrap();
        let parsed: RebarGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(grade, parsed);
    }
}
