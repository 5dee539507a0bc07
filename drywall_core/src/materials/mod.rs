//! # Materials Catalog
//!
//! Fixed product data used by the takeoff: sheet sizes, board thicknesses,
//! framing spacing and lengths, waste presets, and the density/coverage
//! constants for fasteners and joint compound.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::materials::{SheetSize, StudSpacing, WastePreset};
//!
//! assert_eq!(SheetSize::STANDARD.area_sqft(), 32.0);
//! assert_eq!(StudSpacing::default().inches(), 16.0);
//! assert_eq!(WastePreset::Standard.factor(), 0.10);
//! ```

pub mod framing;
pub mod sheets;

pub use framing::{StudSpacing, STUD_LENGTHS_FT};
pub use sheets::{DrywallThickness, SheetSize};

use serde::{Deserialize, Serialize};

/// Screws per 4x8 sheet (12" along each stud at 16" OC)
pub const SCREWS_PER_SHEET: u32 = 32;

/// Approximate count of #6 x 1-5/8" screws in one pound
pub const SCREWS_PER_POUND: u32 = 300;

/// Joint compound coverage in sq ft per gallon, three coats
pub const JOINT_COMPOUND_COVERAGE_SQFT: f64 = 110.0;

/// Default waste allowance (10%)
pub const DEFAULT_WASTE_FACTOR: f64 = 0.10;

/// Highest waste allowance accepted (50%)
pub const MAX_WASTE_FACTOR: f64 = 0.5;

/// Waste allowance presets offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WastePreset {
    /// 5% - simple rectangular rooms
    Minimal,
    /// 10%
    #[default]
    Standard,
    /// 15%
    High,
    /// 20% - many openings, angles or soffits
    Complex,
}

impl WastePreset {
    /// All presets, smallest allowance first
    pub const ALL: [WastePreset; 4] = [
        WastePreset::Minimal,
        WastePreset::Standard,
        WastePreset::High,
        WastePreset::Complex,
    ];

    /// Fractional overage (0.05 = 5%)
    pub fn factor(&self) -> f64 {
        match self {
            WastePreset::Minimal => 0.05,
            WastePreset::Standard => 0.10,
            WastePreset::High => 0.15,
            WastePreset::Complex => 0.20,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            WastePreset::Minimal => "Minimal (5%)",
            WastePreset::Standard => "Standard (10%)",
            WastePreset::High => "High (15%)",
            WastePreset::Complex => "Complex (20%)",
        }
    }

    /// Find the preset matching a factor, if any
    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| (preset.factor() - factor).abs() < 1e-9)
    }
}

impl std::fmt::Display for WastePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
