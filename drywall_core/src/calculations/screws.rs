//! # Drywall Screws
//!
//! Screws are sold by the pound, so "boxes" and pounds are the same number.

use serde::{Deserialize, Serialize};

use crate::materials::{SCREWS_PER_POUND, SCREWS_PER_SHEET};

/// Fastener takeoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrewsResult {
    pub total_screws: u32,
    /// Whole pounds at [`SCREWS_PER_POUND`] per pound
    pub pounds_needed: u32,
    /// Same as `pounds_needed`
    pub boxes_needed: u32,
}

/// Screws for `number_of_sheets` at the standard 32 per sheet.
///
/// ```rust
/// use drywall_core::calculations::screws::calculate_screws;
///
/// let screws = calculate_screws(20);
/// assert_eq!(screws.total_screws, 640);
/// assert_eq!(screws.pounds_needed, 3);
/// ```
pub fn calculate_screws(number_of_sheets: u32) -> ScrewsResult {
    calculate_screws_with(number_of_sheets, SCREWS_PER_SHEET)
}

/// Screws for `number_of_sheets` at a custom density.
pub fn calculate_screws_with(number_of_sheets: u32, screws_per_sheet: u32) -> ScrewsResult {
    let total_screws = number_of_sheets.saturating_mul(screws_per_sheet);
    let pounds_needed = total_screws.div_ceil(SCREWS_PER_POUND);

    ScrewsResult {
        total_screws,
        pounds_needed,
        boxes_needed: pounds_needed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screw_formula() {
        for n in 0..200u32 {
            let result = calculate_screws(n);
            assert_eq!(result.total_screws, n * 32);
            assert_eq!(result.pounds_needed, ((n * 32) as f64 / 300.0).ceil() as u32);
            assert_eq!(result.boxes_needed, result.pounds_needed);
        }
    }

    #[test]
    fn test_zero_sheets() {
        let result = calculate_screws(0);
        assert_eq!(result.total_screws, 0);
        assert_eq!(result.pounds_needed, 0);
    }

    #[test]
    fn test_custom_density() {
        // 48 screws on a 4x12 sheet
        let result = calculate_screws_with(10, 48);
        assert_eq!(result.total_screws, 480);
        assert_eq!(result.pounds_needed, 2);
    }
}
