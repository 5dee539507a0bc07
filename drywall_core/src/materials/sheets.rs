//! Drywall Sheet Products
//!
//! Panel sizes and board thicknesses. Thickness does not enter the takeoff
//! arithmetic; it is carried through to the estimate so the buyer orders
//! the right board.

use serde::{Deserialize, Serialize};

/// Panel size in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSize {
    /// Short side (ft)
    pub width_ft: f64,
    /// Long side (ft)
    pub length_ft: f64,
}

impl SheetSize {
    /// 4' x 8' (32 sq ft)
    pub const STANDARD: SheetSize = SheetSize {
        width_ft: 4.0,
        length_ft: 8.0,
    };

    /// 4' x 12' (48 sq ft)
    pub const LARGE: SheetSize = SheetSize {
        width_ft: 4.0,
        length_ft: 12.0,
    };

    /// Create a custom panel size
    pub fn new(width_ft: f64, length_ft: f64) -> Self {
        SheetSize { width_ft, length_ft }
    }

    /// Face area of one sheet in sq ft
    pub fn area_sqft(&self) -> f64 {
        self.width_ft * self.length_ft
    }

    /// Designation like `4x8`
    pub fn designation(&self) -> String {
        format!("{}x{}", self.width_ft, self.length_ft)
    }
}

impl Default for SheetSize {
    fn default() -> Self {
        SheetSize::STANDARD
    }
}

/// Gypsum board thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DrywallThickness {
    #[serde(rename = "1/4\"")]
    QuarterInch,
    #[serde(rename = "3/8\"")]
    ThreeEighthsInch,
    #[default]
    #[serde(rename = "1/2\"")]
    HalfInch,
    #[serde(rename = "5/8\"")]
    FiveEighthsInch,
}

impl DrywallThickness {
    /// All thicknesses, thinnest first
    pub const ALL: [DrywallThickness; 4] = [
        DrywallThickness::QuarterInch,
        DrywallThickness::ThreeEighthsInch,
        DrywallThickness::HalfInch,
        DrywallThickness::FiveEighthsInch,
    ];

    /// Label as written on the order (e.g. `1/2"`)
    pub fn label(&self) -> &'static str {
        match self {
            DrywallThickness::QuarterInch => "1/4\"",
            DrywallThickness::ThreeEighthsInch => "3/8\"",
            DrywallThickness::HalfInch => "1/2\"",
            DrywallThickness::FiveEighthsInch => "5/8\"",
        }
    }

    /// Thickness in inches
    pub fn inches(&self) -> f64 {
        match self {
            DrywallThickness::QuarterInch => 0.25,
            DrywallThickness::ThreeEighthsInch => 0.375,
            DrywallThickness::HalfInch => 0.5,
            DrywallThickness::FiveEighthsInch => 0.625,
        }
    }

    /// Typical use
    pub fn usage(&self) -> &'static str {
        match self {
            DrywallThickness::QuarterInch => "Curved walls, double-layer",
            DrywallThickness::ThreeEighthsInch => "Repair, covering",
            DrywallThickness::HalfInch => "Standard walls/ceilings",
            DrywallThickness::FiveEighthsInch => "Fire-rated, soundproofing",
        }
    }

    /// Look up a thickness by its label, ignoring surrounding whitespace
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl std::fmt::Display for DrywallThickness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_areas() {
        assert_eq!(SheetSize::STANDARD.area_sqft(), 32.0);
        assert_eq!(SheetSize::LARGE.area_sqft(), 48.0);
        assert_eq!(SheetSize::default(), SheetSize::STANDARD);
        assert_eq!(SheetSize::LARGE.designation(), "4x12");
    }

    #[test]
    fn test_thickness_serializes_as_label() {
        let json = serde_json::to_string(&DrywallThickness::HalfInch).unwrap();
        assert_eq!(json, "\"1/2\\\"\"");

        let roundtrip: DrywallThickness = serde_json::from_str("\"5/8\\\"\"").unwrap();
        assert_eq!(roundtrip, DrywallThickness::FiveEighthsInch);
    }

    #[test]
    fn test_thickness_lookup() {
        assert_eq!(
            DrywallThickness::from_label(" 3/8\" "),
            Some(DrywallThickness::ThreeEighthsInch)
        );
        assert_eq!(DrywallThickness::from_label("1\""), None);
        for t in DrywallThickness::ALL {
            assert_eq!(DrywallThickness::from_label(t.label()), Some(t));
        }
    }
}
