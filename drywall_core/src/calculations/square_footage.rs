//! # Square Footage
//!
//! Wall (and optional ceiling) area of a rectangular room. This is the only
//! step that rejects non-positive dimensions.
//!
//! ```rust
//! use drywall_core::calculations::square_footage::calculate_square_footage;
//!
//! let area = calculate_square_footage("20", "15", "8", false).unwrap();
//! assert_eq!(area.wall_area, 560.0);
//! assert_eq!(area.total_area, 560.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::measurement::normalize_to_feet;
use crate::units::{round2, Feet};

/// Normalized room size in decimal feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub length: Feet,
    pub width: Feet,
    pub height: Feet,
}

impl RoomDimensions {
    /// Normalize raw measurement strings. Does not check positivity.
    pub fn from_measurements(length: &str, width: &str, height: &str) -> Self {
        RoomDimensions {
            length: normalize_to_feet(length),
            width: normalize_to_feet(width),
            height: normalize_to_feet(height),
        }
    }

    /// Fail unless every dimension is strictly positive.
    pub fn ensure_positive(&self) -> CalcResult<()> {
        if self.length.is_positive() && self.width.is_positive() && self.height.is_positive() {
            Ok(())
        } else {
            Err(CalcError::InvalidDimensions {
                length_ft: self.length.0,
                width_ft: self.width.0,
                height_ft: self.height.0,
            })
        }
    }

    /// Room perimeter 2(L + W) in feet
    pub fn perimeter(&self) -> Feet {
        (self.length + self.width) * 2.0
    }

    /// Area of the four walls, unrounded
    pub fn wall_area(&self) -> f64 {
        2.0 * self.length.area_by(self.height).0 + 2.0 * self.width.area_by(self.height).0
    }

    /// Floor/ceiling area, unrounded
    pub fn ceiling_area(&self) -> f64 {
        self.length.area_by(self.width).0
    }
}

/// Surface areas to be covered, in sq ft rounded to hundredths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquareFootageResult {
    pub wall_area: f64,
    /// Zero unless the ceiling was requested
    pub ceiling_area: f64,
    pub total_area: f64,
}

/// Compute areas for already-normalized dimensions.
pub fn square_footage_for(
    dims: &RoomDimensions,
    include_ceiling: bool,
) -> CalcResult<SquareFootageResult> {
    dims.ensure_positive()?;

    let wall_area = dims.wall_area();
    let ceiling_area = if include_ceiling { dims.ceiling_area() } else { 0.0 };

    Ok(SquareFootageResult {
        wall_area: round2(wall_area),
        ceiling_area: round2(ceiling_area),
        total_area: round2(wall_area + ceiling_area),
    })
}

/// Compute wall and ceiling area from raw measurement strings.
///
/// # Errors
///
/// [`CalcError::InvalidDimensions`] if any dimension normalizes to zero or less.
pub fn calculate_square_footage(
    length: &str,
    width: &str,
    height: &str,
    include_ceiling: bool,
) -> CalcResult<SquareFootageResult> {
    let dims = RoomDimensions::from_measurements(length, width, height);
    square_footage_for(&dims, include_ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls_only() {
        let result = calculate_square_footage("20", "15", "8", false).unwrap();
        assert_eq!(result.wall_area, 560.0);
        assert_eq!(result.ceiling_area, 0.0);
        assert_eq!(result.total_area, 560.0);
    }

    #[test]
    fn test_with_ceiling() {
        let result = calculate_square_footage("20", "15", "8", true).unwrap();
        assert_eq!(result.ceiling_area, 300.0);
        assert_eq!(result.total_area, 860.0);
    }

    #[test]
    fn test_mixed_formats() {
        // 12'6" x 10' x 96" -> 2(12.5*8) + 2(10*8) = 360
        let result = calculate_square_footage("12'6\"", "10'", "96\"", false).unwrap();
        assert_eq!(result.wall_area, 360.0);
    }

    #[test]
    fn test_rounds_to_hundredths() {
        // 10'1" x 10' x 8': 2(10.0833*8) + 160 = 321.333...
        let result = calculate_square_footage("10'1\"", "10", "8", false).unwrap();
        assert_eq!(result.wall_area, 321.33);
    }

    #[test]
    fn test_rejects_non_positive() {
        let rooms = [("0", "15", "8"), ("20", "", "8"), ("20", "15", "-8"), ("abc", "15", "8")];
        for (l, w, h) in rooms {
            let err = calculate_square_footage(l, w, h, false).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_DIMENSIONS");
            assert_eq!(err.to_string(), "All dimensions must be positive values");
        }
    }

    #[test]
    fn test_perimeter() {
        let dims = RoomDimensions::from_measurements("20", "15", "8");
        assert_eq!(dims.perimeter().value(), 70.0);
    }
}
