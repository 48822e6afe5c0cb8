//! # shear_core - Reinforced-Concrete Shear Verification Engine
//!
//! `shear_core` verifies the shear resistance of rectangular reinforced-concrete
//! sections per NTC 2018 with a clean, LLM-friendly API. All inputs and outputs
//! are JSON-serializable, making it ideal for integration with AI assistants
//! via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use shear_core::{calculate, ShearInput, ShearMethod, TransverseReinforcement};
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
//! assert!(result.verified);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Shear verification input, result and method types
//! - [`equations`] - Pure truss-analogy formulas with references
//! - [`materials`] - Concrete classes, rebar grades and bar sizes
//! - [`factors`] - Partial safety factors and code section references
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod factors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, ShearInput, ShearMethod, ShearResult, TransverseReinforcement};
pub use errors::{CalcError, CalcResult};
pub use factors::PartialFactors;
pub use materials::{BarSize, ConcreteClass, RebarGrade};
