//! # Drywall Sheets
//!
//! Sheet count for a covered area plus waste allowance. Sheets are bought
//! whole, so the count always rounds up.

use serde::{Deserialize, Serialize};

use crate::calculations::whole_count;
use crate::errors::{CalcError, CalcResult};
use crate::materials::SheetSize;
use crate::units::round2;
use crate::validation::is_valid_waste_factor;

/// Sheet takeoff
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrywallResult {
    /// Whole sheets to buy
    pub sheets_needed: u32,
    /// Area of one sheet (sq ft)
    pub sheet_area: f64,
    /// Area covered by the purchased sheets (sq ft)
    pub total_coverage: f64,
    /// Purchased area beyond the surface area (sq ft, hundredths)
    pub waste_amount: f64,
    /// Waste allowance as a whole percentage
    pub waste_percentage: u32,
}

/// Calculate sheets needed to cover `total_sqft` with `waste_factor` overage.
///
/// # Errors
///
/// [`CalcError::InvalidArea`] if `total_sqft` is zero or negative.
/// [`CalcError::InvalidInput`] if `waste_factor` is outside [0, 0.5] or the
/// sheet count does not fit a `u32`.
///
/// # Example
///
/// ```rust
/// use drywall_core::calculations::drywall::calculate_drywall_sheets;
/// use drywall_core::materials::SheetSize;
///
/// let result = calculate_drywall_sheets(560.0, 0.10, SheetSize::STANDARD).unwrap();
/// assert_eq!(result.sheets_needed, 20); // ceil(616 / 32)
/// assert_eq!(result.waste_percentage, 10);
/// ```
pub fn calculate_drywall_sheets(
    total_sqft: f64,
    waste_factor: f64,
    sheet: SheetSize,
) -> CalcResult<DrywallResult> {
    if total_sqft <= 0.0 || total_sqft.is_nan() {
        return Err(CalcError::InvalidArea { total_sqft });
    }

    if !is_valid_waste_factor(waste_factor) {
        return Err(CalcError::invalid_input(
            "waste_factor",
            waste_factor.to_string(),
            "Waste factor must be between 0 and 0.5",
        ));
    }

    let sheet_area = sheet.area_sqft();
    if sheet_area <= 0.0 {
        return Err(CalcError::invalid_input(
            "sheet_size",
            sheet.designation(),
            "Sheet dimensions must be positive",
        ));
    }

    let area_with_waste = total_sqft * (1.0 + waste_factor);
    let sheets_needed = whole_count("sheets_needed", (area_with_waste / sheet_area).ceil())?;
    let total_coverage = f64::from(sheets_needed) * sheet_area;

    Ok(DrywallResult {
        sheets_needed,
        sheet_area,
        total_coverage,
        waste_amount: round2(total_coverage - total_sqft),
        waste_percentage: whole_count("waste_percentage", (waste_factor * 100.0).round())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_room() {
        let result = calculate_drywall_sheets(560.0, 0.10, SheetSize::STANDARD).unwrap();
        assert_eq!(result.sheets_needed, 20);
        assert_eq!(result.sheet_area, 32.0);
        assert_eq!(result.total_coverage, 640.0);
        assert_eq!(result.waste_amount, 80.0);
        assert_eq!(result.waste_percentage, 10);
    }

    #[test]
    fn test_always_rounds_up() {
        // 32.01 sq ft with no waste still needs a second sheet
        let result = calculate_drywall_sheets(32.01, 0.0, SheetSize::STANDARD).unwrap();
        assert_eq!(result.sheets_needed, 2);

        let exact = calculate_drywall_sheets(64.0, 0.0, SheetSize::STANDARD).unwrap();
        assert_eq!(exact.sheets_needed, 2);
        assert_eq!(exact.waste_amount, 0.0);
    }

    #[test]
    fn test_sheet_formula_and_coverage() {
        for area in [1.0, 17.5, 100.0, 333.33, 560.0, 1234.56] {
            for waste in [0.0, 0.05, 0.10, 0.15, 0.2, 0.5] {
                let result = calculate_drywall_sheets(area, waste, SheetSize::STANDARD).unwrap();
                let expected = (area * (1.0 + waste) / 32.0).ceil() as u32;
                assert_eq!(result.sheets_needed, expected);
                assert!(result.total_coverage >= area);
                assert!(result.waste_amount >= 0.0);
            }
        }
    }

    #[test]
    fn test_large_sheets() {
        let result = calculate_drywall_sheets(560.0, 0.10, SheetSize::LARGE).unwrap();
        assert_eq!(result.sheets_needed, 13); // ceil(616 / 48)
        assert_eq!(result.total_coverage, 624.0);
    }

    #[test]
    fn test_rejects_non_positive_area() {
        assert!(calculate_drywall_sheets(0.0, 0.1, SheetSize::STANDARD).is_err());
        let err = calculate_drywall_sheets(-10.0, 0.1, SheetSize::STANDARD).unwrap_err();
        assert_eq!(err.to_string(), "Total square footage must be positive");
    }

    #[test]
    fn test_waste_percentage_rounds() {
        let result = calculate_drywall_sheets(100.0, 0.125, SheetSize::STANDARD).unwrap();
        assert_eq!(result.waste_percentage, 13);
    }

    #[test]
    fn test_rejects_waste_factor_out_of_range() {
        for waste in [-1.0, -0.5, 0.75, 2.0, f64::NAN] {
            let err = calculate_drywall_sheets(560.0, waste, SheetSize::STANDARD).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_rejects_uncountable_sheet_total() {
        let err = calculate_drywall_sheets(1e12, 0.1, SheetSize::STANDARD).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("sheets_needed"));

        assert!(calculate_drywall_sheets(f64::INFINITY, 0.1, SheetSize::STANDARD).is_err());
    }
}
