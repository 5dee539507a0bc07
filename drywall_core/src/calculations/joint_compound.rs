//! # Joint Compound
//!
//! Gallons of mud for a three-coat finish, plus a suggested mix of buckets.
//!
//! The bucket mix is a greedy 5 → 3.5 → 1 gallon breakdown: as many
//! five-gallon buckets as fit, then as many 3.5-gallon buckets as fit the
//! remainder, then the leftover (possibly fractional) rounded up to
//! one-gallon buckets. It is not a minimal-count partition; existing output
//! depends on this exact order.

use serde::{Deserialize, Serialize};

use crate::calculations::whole_count;
use crate::errors::CalcResult;
use crate::materials::JOINT_COMPOUND_COVERAGE_SQFT;

/// Bucket counts by size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerCounts {
    pub five_gallon: u32,
    pub three_and_half_gallon: u32,
    pub one_gallon: u32,
}

impl ContainerCounts {
    /// Greedy breakdown of a whole number of gallons
    pub fn for_gallons(gallons: u32) -> Self {
        let five_gallon = gallons / 5;
        let remaining = f64::from(gallons % 5);

        let three_and_half_gallon = (remaining / 3.5).floor() as u32;
        let remaining = remaining % 3.5;

        ContainerCounts {
            five_gallon,
            three_and_half_gallon,
            one_gallon: remaining.ceil() as u32,
        }
    }

    /// Total gallons held by these buckets
    pub fn capacity_gallons(&self) -> f64 {
        f64::from(self.five_gallon) * 5.0
            + f64::from(self.three_and_half_gallon) * 3.5
            + f64::from(self.one_gallon)
    }
}

impl std::fmt::Display for ContainerCounts {
    /// e.g. `1 five-gallon bucket + 2 one-gallon buckets`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = [
            (self.five_gallon, "five-gallon"),
            (self.three_and_half_gallon, "3.5-gallon"),
            (self.one_gallon, "one-gallon"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, size)| {
            let plural = if count > 1 { "s" } else { "" };
            format!("{} {} bucket{}", count, size, plural)
        })
        .collect();

        write!(f, "{}", parts.join(" + "))
    }
}

/// Joint compound takeoff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MudResult {
    pub total_gallons: u32,
    /// Human-readable bucket mix; empty when no compound is needed
    pub container_breakdown: String,
    pub containers: ContainerCounts,
}

/// Gallons of joint compound for `total_sqft` at 110 sq ft per gallon.
///
/// Fails with [`CalcError::InvalidInput`](crate::errors::CalcError::InvalidInput)
/// only when the gallon count does not fit a `u32`.
///
/// ```rust
/// use drywall_core::calculations::joint_compound::calculate_joint_compound;
///
/// let mud = calculate_joint_compound(560.0).unwrap();
/// assert_eq!(mud.total_gallons, 6);
/// assert_eq!(mud.container_breakdown, "1 five-gallon bucket + 1 one-gallon bucket");
/// ```
pub fn calculate_joint_compound(total_sqft: f64) -> CalcResult<MudResult> {
    // Negative or NaN area needs no compound
    let gallons = (total_sqft.max(0.0) / JOINT_COMPOUND_COVERAGE_SQFT).ceil();
    let total_gallons = whole_count("total_gallons", gallons)?;
    let containers = ContainerCounts::for_gallons(total_gallons);

    Ok(MudResult {
        total_gallons,
        container_breakdown: containers.to_string(),
        containers,
    })
}
