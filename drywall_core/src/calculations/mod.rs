//! # Material Calculations
//!
//! Each derivation step is a pure function in its own module:
//!
//! - [`square_footage`] - wall and ceiling area (the positivity gate)
//! - [`drywall`] - sheet count with waste allowance
//! - [`screws`] - fasteners by the pound
//! - [`joint_compound`] - gallons and bucket mix
//! - [`studs`] - metal framing (optional)
//!
//! [`calculate_all_materials`] runs them in order and returns one
//! [`MaterialEstimate`].
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::calculations::{calculate_all_materials, CalculationOptions};
//!
//! let options = CalculationOptions::default();
//! let estimate = calculate_all_materials("20", "15", "8", &options).unwrap();
//! assert_eq!(estimate.square_footage.total_area, 560.0);
//! assert_eq!(estimate.drywall.sheets_needed, 20);
//! assert_eq!(estimate.screws.pounds_needed, 3);
//! assert_eq!(estimate.mud.total_gallons, 6);
//! assert!(estimate.studs.is_none());
//! ```

pub mod drywall;
pub mod joint_compound;
pub mod screws;
pub mod square_footage;
pub mod studs;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{DrywallThickness, SheetSize, StudSpacing, DEFAULT_WASTE_FACTOR};
use crate::validation::is_valid_waste_factor;

/// Largest count any takeoff line can report
pub const MAX_COUNT: u32 = u32::MAX;

/// Convert an already-rounded quantity into a whole count.
///
/// Fails instead of saturating when the value is negative, not finite, or
/// beyond [`MAX_COUNT`].
pub(crate) fn whole_count(field: &str, value: f64) -> CalcResult<u32> {
    if value.is_finite() && value >= 0.0 && value <= f64::from(MAX_COUNT) {
        Ok(value as u32)
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Quantity is outside the countable range",
        ))
    }
}

// Re-export commonly used types
pub use drywall::{calculate_drywall_sheets, DrywallResult};
pub use joint_compound::{calculate_joint_compound, ContainerCounts, MudResult};
pub use screws::{calculate_screws, calculate_screws_with, ScrewsResult};
pub use square_footage::{calculate_square_footage, RoomDimensions, SquareFootageResult};
pub use studs::{calculate_studs, StudsResult};

/// Options for a full estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "include_ceiling": true,
///   "waste_factor": 0.15,
///   "stud_spacing": 24.0,
///   "drywall_thickness": "5/8\"",
///   "include_studs": true,
///   "sheet_size": { "width_ft": 4.0, "length_ft": 12.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationOptions {
    /// Add the ceiling to the covered area
    pub include_ceiling: bool,

    /// Fractional overage, 0.0 to 0.5
    pub waste_factor: f64,

    /// On-center framing spacing
    pub stud_spacing: StudSpacing,

    /// Board thickness, carried to the estimate only
    pub drywall_thickness: DrywallThickness,

    /// Compute framing quantities
    pub include_studs: bool,

    /// Panel size used for the sheet count
    pub sheet_size: SheetSize,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        CalculationOptions {
            include_ceiling: false,
            waste_factor: DEFAULT_WASTE_FACTOR,
            stud_spacing: StudSpacing::default(),
            drywall_thickness: DrywallThickness::default(),
            include_studs: false,
            sheet_size: SheetSize::default(),
        }
    }
}

impl CalculationOptions {
    /// Validate option values.
    pub fn validate(&self) -> CalcResult<()> {
        if !is_valid_waste_factor(self.waste_factor) {
            return Err(CalcError::invalid_input(
                "waste_factor",
                self.waste_factor.to_string(),
                "Waste factor must be between 0 and 0.5",
            ));
        }
        if self.sheet_size.area_sqft() <= 0.0 {
            return Err(CalcError::invalid_input(
                "sheet_size",
                self.sheet_size.designation(),
                "Sheet dimensions must be positive",
            ));
        }
        Ok(())
    }

    pub fn with_ceiling(mut self) -> Self {
        self.include_ceiling = true;
        self
    }

    pub fn with_studs(mut self, spacing: StudSpacing) -> Self {
        self.include_studs = true;
        self.stud_spacing = spacing;
        self
    }

    pub fn with_waste_factor(mut self, waste_factor: f64) -> Self {
        self.waste_factor = waste_factor;
        self
    }
}

/// Complete material list for one room.
///
/// Built fresh by [`calculate_all_materials`]; never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEstimate {
    /// Normalized dimensions the estimate was computed from
    pub dimensions: RoomDimensions,
    pub square_footage: SquareFootageResult,
    pub drywall: DrywallResult,
    pub screws: ScrewsResult,
    pub mud: MudResult,
    /// Present only when framing was requested
    pub studs: Option<StudsResult>,
    pub drywall_thickness: DrywallThickness,
}

fn run_pipeline(
    dims: &RoomDimensions,
    options: &CalculationOptions,
) -> CalcResult<MaterialEstimate> {
    options.validate()?;

    let square_footage = square_footage::square_footage_for(dims, options.include_ceiling)?;
    tracing::debug!(total_area = square_footage.total_area, "square footage");

    let drywall = calculate_drywall_sheets(
        square_footage.total_area,
        options.waste_factor,
        options.sheet_size,
    )?;
    tracing::debug!(sheets = drywall.sheets_needed, "drywall sheets");

    let screws = calculate_screws(drywall.sheets_needed);
    tracing::debug!(pounds = screws.pounds_needed, "screws");

    let mud = calculate_joint_compound(square_footage.total_area)?;
    tracing::debug!(gallons = mud.total_gallons, "joint compound");

    let studs = if options.include_studs {
        let studs = studs::studs_for(dims, options.stud_spacing.inches())?;
        tracing::debug!(studs = studs.vertical_studs, "framing");
        Some(studs)
    } else {
        None
    };

    Ok(MaterialEstimate {
        dimensions: *dims,
        square_footage,
        drywall,
        screws,
        mud,
        studs,
        drywall_thickness: options.drywall_thickness,
    })
}

/// Run the full takeoff: area → sheets → screws → mud, plus framing when
/// `options.include_studs` is set.
///
/// # Errors
///
/// Any step failure is returned as [`CalcError::CalculationFailed`] carrying
/// the step's message, e.g. `Calculation error: All dimensions must be
/// positive values`. No partial estimate is returned.
pub fn calculate_all_materials(
    length: &str,
    width: &str,
    height: &str,
    options: &CalculationOptions,
) -> CalcResult<MaterialEstimate> {
    let dims = RoomDimensions::from_measurements(length, width, height);
    tracing::debug!(
        length_ft = dims.length.0,
        width_ft = dims.width.0,
        height_ft = dims.height.0,
        "calculating materials"
    );

    run_pipeline(&dims, options).map_err(|err| {
        tracing::debug!(error = %err, "calculation failed");
        CalcError::wrap(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_standard_room() {
        let options = CalculationOptions {
            include_ceiling: false,
            waste_factor: 0.10,
            ..Default::default()
        };
        let estimate = calculate_all_materials("20", "15", "8", &options).unwrap();

        assert_eq!(estimate.square_footage.wall_area, 560.0);
        assert_eq!(estimate.square_footage.total_area, 560.0);
        assert_eq!(estimate.drywall.sheets_needed, 20);
        assert_eq!(estimate.screws.total_screws, 640);
        assert_eq!(estimate.screws.pounds_needed, 3);
        assert_eq!(estimate.mud.total_gallons, 6);
        assert_eq!(estimate.drywall_thickness, DrywallThickness::HalfInch);
        assert_eq!(estimate.dimensions.length.value(), 20.0);
    }

    #[test]
    fn test_studs_only_when_requested() {
        let defaults = CalculationOptions::default();
        let without = calculate_all_materials("20", "15", "8", &defaults).unwrap();
        assert!(without.studs.is_none());

        let options = CalculationOptions::default().with_studs(StudSpacing::Oc16);
        let with = calculate_all_materials("20", "15", "8", &options).unwrap();
        let studs = with.studs.unwrap();
        assert_eq!(studs.vertical_studs, 56);
        assert_eq!(studs.spacing, 16.0);
    }

    #[test]
    fn test_ceiling_flows_downstream() {
        let options = CalculationOptions::default().with_ceiling();
        let estimate = calculate_all_materials("20", "15", "8", &options).unwrap();
        assert_eq!(estimate.square_footage.total_area, 860.0);
        // ceil(860 * 1.1 / 32) = ceil(29.5625)
        assert_eq!(estimate.drywall.sheets_needed, 30);
        assert_eq!(estimate.screws.total_screws, 960);
        // ceil(860 / 110) = 8
        assert_eq!(estimate.mud.total_gallons, 8);
    }

    #[test]
    fn test_failure_is_wrapped() {
        let defaults = CalculationOptions::default();
        let err = calculate_all_materials("0", "15", "8", &defaults).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert_eq!(
            err.to_string(),
            "Calculation error: All dimensions must be positive values"
        );
    }

    #[test]
    fn test_options_validation() {
        assert!(CalculationOptions::default().validate().is_ok());
        let err = CalculationOptions::default()
            .with_waste_factor(0.75)
            .validate()
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_options_json_defaults() {
        let json = r#"{"include_studs": true, "stud_spacing": 24}"#;
        let options: CalculationOptions = serde_json::from_str(json).unwrap();
        assert!(options.include_studs);
        assert_eq!(options.stud_spacing, StudSpacing::Oc24);
        assert_eq!(options.waste_factor, 0.10);
        assert_eq!(options.sheet_size, SheetSize::STANDARD);
    }

    #[test]
    fn test_estimate_serialization() {
        let options = CalculationOptions::default().with_studs(StudSpacing::Oc24);
        let estimate = calculate_all_materials("12'6\"", "10", "96\"", &options).unwrap();
        let json = serde_json::to_string_pretty(&estimate).unwrap();

        assert!(json.contains("sheets_needed"));
        assert!(json.contains("container_breakdown"));
        assert!(json.contains("vertical_studs"));

        let roundtrip: MaterialEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, estimate);
    }

    #[test]
    fn test_rejects_waste_factor_out_of_range() {
        for waste in [-1.0, -0.5, -0.01, 0.51, 2.0, f64::NAN] {
            let options = CalculationOptions::default().with_waste_factor(waste);
            let err = calculate_all_materials("20", "15", "8", &options).unwrap_err();
            assert_eq!(err.error_code(), "CALCULATION_FAILED");
            assert!(err.to_string().contains("waste_factor"), "{}", err);
        }
    }

    #[test]
    fn test_waste_factor_bounds_accepted() {
        for waste in [0.0, 0.5] {
            let options = CalculationOptions::default().with_waste_factor(waste);
            let estimate = calculate_all_materials("20", "15", "8", &options).unwrap();
            assert!(estimate.drywall.total_coverage >= estimate.square_footage.total_area);
        }
    }

    #[test]
    fn test_oversized_room_fails_instead_of_overflowing() {
        let options = CalculationOptions::default().with_studs(StudSpacing::Oc12);
        let err = calculate_all_materials("9000000000'", "15", "8", &options).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");

        let err = calculate_all_materials("1e30'", "15", "8", &options).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_whole_count() {
        assert_eq!(whole_count("sheets", 20.0).unwrap(), 20);
        assert_eq!(whole_count("sheets", f64::from(MAX_COUNT)).unwrap(), MAX_COUNT);
        assert!(whole_count("sheets", f64::from(MAX_COUNT) + 1.0).is_err());
        assert!(whole_count("sheets", -1.0).is_err());
        assert!(whole_count("sheets", f64::INFINITY).is_err());
        assert!(whole_count("sheets", f64::NAN).is_err());
    }
}
