//! # drywall_core - Drywall Material Estimation Engine
//!
//! `drywall_core` turns room dimensions typed by a person (`12'6"`, `96"`,
//! `102`) into a purchasable material list: drywall sheets, screws, joint
//! compound and, optionally, metal studs and track.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Lenient parsing, strict validation**: the normalizer never fails;
//!   validation decides what is acceptable before calculating
//!
//! ## Quick Start
//!
//! ```rust
//! use drywall_core::{calculate_all_materials, validate_room_dimensions, CalculationOptions};
//!
//! let validation = validate_room_dimensions("20", "15", "8'");
//! assert!(validation.valid);
//!
//! let options = CalculationOptions::default();
//! let estimate = calculate_all_materials("20", "15", "8'", &options).unwrap();
//! assert_eq!(estimate.drywall.sheets_needed, 20);
//!
//! // Serialize to JSON for the presentation layer
//! let json = serde_json::to_string_pretty(&estimate).unwrap();
//! assert!(json.contains("container_breakdown"));
//! ```
//!
//! ## Modules
//!
//! - [`measurement`] - Measurement text to decimal feet
//! - [`calculations`] - Area, sheets, screws, mud, studs and the full estimate
//! - [`validation`] - Format and range checks for raw input
//! - [`materials`] - Sheet sizes, thicknesses, stud spacing, constants
//! - [`settings`] - JSON-backed default options
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod measurement;
pub mod settings;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate_all_materials, calculate_drywall_sheets, calculate_joint_compound, calculate_screws,
    calculate_square_footage, calculate_studs, CalculationOptions, MaterialEstimate,
};
pub use errors::{CalcError, CalcResult};
pub use measurement::normalize_to_feet;
pub use settings::EstimatorSettings;
pub use validation::{sanitize_input, validate_room_dimensions, ValidationResult};
