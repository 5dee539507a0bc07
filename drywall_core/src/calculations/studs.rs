//! # Metal Stud Framing
//!
//! Vertical studs for the four walls plus track (runner) footage.
//!
//! Each wall gets `floor(wall / spacing) + 1` studs, the extra one closing the
//! end. Track length is the room perimeter rounded up, reported as one figure
//! rather than split into top and bottom runs.

use serde::{Deserialize, Serialize};

use crate::calculations::square_footage::RoomDimensions;
use crate::calculations::whole_count;
use crate::errors::{CalcError, CalcResult};
use crate::materials::framing::stud_length_for_height;
use crate::units::{Feet, Inches};

/// Framing takeoff
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudsResult {
    /// Vertical studs for all four walls
    pub vertical_studs: u32,
    /// Stock stud length in feet (8, 9, 10 or 12)
    pub stud_length: u32,
    /// Linear feet of track
    pub track_length: u32,
    /// On-center spacing in inches
    pub spacing: f64,
}

fn studs_along(wall: Feet, spacing: Feet) -> CalcResult<u32> {
    let bays = whole_count("vertical_studs", (wall.0 / spacing.0).floor().max(0.0))?;
    bays.checked_add(1).ok_or_else(|| too_many_studs(wall))
}

fn too_many_studs(wall: Feet) -> CalcError {
    CalcError::invalid_input("vertical_studs", wall.0.to_string(), "Too many studs to count")
}

/// Framing for already-normalized dimensions.
pub fn studs_for(dims: &RoomDimensions, spacing_in: f64) -> CalcResult<StudsResult> {
    if spacing_in <= 0.0 || spacing_in.is_nan() {
        return Err(CalcError::invalid_input(
            "stud_spacing",
            spacing_in.to_string(),
            "Stud spacing must be positive",
        ));
    }

    let spacing: Feet = Inches(spacing_in).into();
    let per_length_wall = studs_along(dims.length, spacing)?;
    let per_width_wall = studs_along(dims.width, spacing)?;
    let vertical_studs = per_length_wall
        .checked_add(per_width_wall)
        .and_then(|pair| pair.checked_mul(2))
        .ok_or_else(|| too_many_studs(dims.perimeter()))?;

    Ok(StudsResult {
        vertical_studs,
        stud_length: stud_length_for_height(dims.height.0),
        track_length: whole_count("track_length", dims.perimeter().0.ceil().max(0.0))?,
        spacing: spacing_in,
    })
}

/// Calculate metal framing from raw measurement strings.
///
/// Dimensions are not checked for positivity here.
///
/// # Errors
///
/// [`CalcError::InvalidInput`] if `spacing_in` is not positive or a count does
/// not fit a `u32`.
///
/// # Example
///
/// ```rust
/// use drywall_core::calculations::studs::calculate_studs;
///
/// let studs = calculate_studs("20", "15", "8", 16.0).unwrap();
/// assert_eq!(studs.vertical_studs, 56); // 2 * (16 + 12)
/// assert_eq!(studs.stud_length, 8);
/// assert_eq!(studs.track_length, 70);
/// ```
pub fn calculate_studs(
    length: &str,
    width: &str,
    height: &str,
    spacing_in: f64,
) -> CalcResult<StudsResult> {
    let dims = RoomDimensions::from_measurements(length, width, height);
    studs_for(&dims, spacing_in)
}
