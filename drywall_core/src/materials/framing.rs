//! Metal Stud Framing
//!
//! On-center spacing options and stock stud lengths.

use serde::{Deserialize, Serialize};

/// Stock stud lengths in feet, shortest first
pub const STUD_LENGTHS_FT: [u32; 4] = [8, 9, 10, 12];

/// On-center stud spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "f64", into = "f64")]
pub enum StudSpacing {
    /// 12" OC
    Oc12,
    /// 16" OC
    #[default]
    Oc16,
    /// 19.2" OC
    Oc19_2,
    /// 24" OC
    Oc24,
}

impl StudSpacing {
    /// All spacings, tightest first
    pub const ALL: [StudSpacing; 4] = [
        StudSpacing::Oc12,
        StudSpacing::Oc16,
        StudSpacing::Oc19_2,
        StudSpacing::Oc24,
    ];

    /// Spacing in inches
    pub fn inches(&self) -> f64 {
        match self {
            StudSpacing::Oc12 => 12.0,
            StudSpacing::Oc16 => 16.0,
            StudSpacing::Oc19_2 => 19.2,
            StudSpacing::Oc24 => 24.0,
        }
    }

    /// Display label (e.g. `16" OC`)
    pub fn label(&self) -> &'static str {
        match self {
            StudSpacing::Oc12 => "12\" OC",
            StudSpacing::Oc16 => "16\" OC",
            StudSpacing::Oc19_2 => "19.2\" OC",
            StudSpacing::Oc24 => "24\" OC",
        }
    }

    /// Typical use
    pub fn usage(&self) -> &'static str {
        match self {
            StudSpacing::Oc12 => "Heavy load, commercial",
            StudSpacing::Oc16 => "Standard residential/commercial",
            StudSpacing::Oc19_2 => "Engineered systems",
            StudSpacing::Oc24 => "Light load, non-bearing",
        }
    }

    /// Catalog spacing for an exact inch value
    pub fn from_inches(inches: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.inches() == inches)
    }
}

impl TryFrom<f64> for StudSpacing {
    type Error = String;

    fn try_from(inches: f64) -> Result<Self, Self::Error> {
        StudSpacing::from_inches(inches)
            .ok_or_else(|| format!("{} is not a standard stud spacing (12, 16, 19.2, 24)", inches))
    }
}

impl From<StudSpacing> for f64 {
    fn from(spacing: StudSpacing) -> f64 {
        spacing.inches()
    }
}

impl std::fmt::Display for StudSpacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Shortest stock stud that reaches the given wall height.
///
/// Walls taller than the longest stock stud still get the longest one.
pub fn stud_length_for_height(height_ft: f64) -> u32 {
    STUD_LENGTHS_FT
        .into_iter()
        .find(|&len| f64::from(len) >= height_ft)
        .unwrap_or(STUD_LENGTHS_FT[STUD_LENGTHS_FT.len() - 1])
}
