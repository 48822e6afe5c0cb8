//! # Materials Database
//!
//! Material definitions and property lookups for reinforced-concrete design.
//! Covers the concrete strength classes and reinforcing steel grades of
//! Italian practice, plus the standard stirrup bar diameters.
//!
//! ## Material Types
//!
//! - **Concrete**: strength classes C16/20 through C50/60 per NTC 2018
//!   Tab. 4.1.I, with EN 1992-1-1 Table 3.1 correlations
//! - **Rebar**: current B450 grades plus the legacy FeB grades found in
//!   existing structures
//! - **Bar sizes**: φ5 through φ16 stirrup diameters
//!
//! ## Example
//!
//! ```rust
//! use shear_core::materials::{BarSize, ConcreteClass, RebarGrade};
//!
//! let concrete = ConcreteClass::C35_45;
//! let steel = RebarGrade::B450C;
//! let stirrup = BarSize::Phi8;
//!
//! assert_eq!(concrete.fck_mpa(), 35.0);
//! assert_eq!(steel.fyk_mpa(), 450.0);
//! assert!((stirrup.area_mm2() - 50.265).abs() < 0.001);
//! ```

pub mod bar_sizes;
pub mod concrete;
pub mod rebar;

// Re-export material types
pub use bar_sizes::BarSize;
pub use concrete::{ConcreteClass, ConcreteProperties};
pub use rebar::{RebarGrade, RebarProperties};
