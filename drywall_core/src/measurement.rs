//! # Measurement Normalizer
//!
//! Converts free-form length text into decimal feet.
//!
//! Parsing is an ordered list of named rules ([`MeasurementRule::ORDER`]).
//! The first rule that accepts the trimmed input wins, so precedence matters:
//!
//! | Order | Rule             | Accepts            | Result              |
//! |-------|------------------|--------------------|---------------------|
//! | 1     | `FeetAndInches`  | `8'6"`, `8' 6`, `8 6.5"` | feet + inches / 12 |
//! | 2     | `FeetOnly`       | `8'`, `8.5'`       | feet                |
//! | 3     | `InchesOnly`     | `96"`              | inches / 12         |
//! | 4     | `BareNumber`     | `8`, `102`, `12abc`| feet if ≤ 20, else inches / 12 |
//!
//! Anything no rule accepts (including empty text) normalizes to `0`.
//! No rounding happens here.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::measurement::normalize_to_feet;
//!
//! assert_eq!(normalize_to_feet("8'6\"").value(), 8.5);
//! assert_eq!(normalize_to_feet("102").value(), 8.5);
//! assert_eq!(normalize_to_feet("96\"").value(), 8.0);
//! assert_eq!(normalize_to_feet("").value(), 0.0);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::units::{Feet, Inches};

/// Unit-less numbers above this are read as inches.
///
/// Assumes nobody types a room dimension of 21 inches but plenty of people
/// type `96` or `102` meaning inches. A 20 ft wall stays 20 ft.
pub const BARE_INCHES_THRESHOLD: f64 = 20.0;

static FEET_AND_INCHES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\d+(?:\.\d+)?)(?:'\s*|\s+)(\d+(?:\.\d+)?)"?$"#)
        .expect("feet-and-inches pattern is valid")
});

static FEET_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?)'$").expect("feet pattern is valid"));

static INCHES_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(\d+(?:\.\d+)?)"$"#).expect("inches pattern is valid"));

// Leading float prefix, the way a lenient number parser reads "12abc" as 12.
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("number prefix pattern is valid")
});

/// A single named parse rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementRule {
    /// `8'6"`, `8' 6"`, `8 6` - foot mark and/or whitespace between the parts
    FeetAndInches,
    /// `8'` - number with a trailing foot mark
    FeetOnly,
    /// `96"` - number with a mandatory inch mark
    InchesOnly,
    /// Plain number; above [`BARE_INCHES_THRESHOLD`] it is inches
    BareNumber,
}

impl MeasurementRule {
    /// Rules in precedence order. Reordering changes results.
    pub const ORDER: [MeasurementRule; 4] = [
        MeasurementRule::FeetAndInches,
        MeasurementRule::FeetOnly,
        MeasurementRule::InchesOnly,
        MeasurementRule::BareNumber,
    ];

    /// Try this rule alone against already-trimmed input.
    pub fn apply(&self, input: &str) -> Option<Feet> {
        match self {
            MeasurementRule::FeetAndInches => {
                let caps = FEET_AND_INCHES.captures(input)?;
                let feet: f64 = caps[1].parse().ok()?;
                let inches: f64 = caps[2].parse().ok()?;
                Some(Feet(feet) + Feet::from(Inches(inches)))
            }
            MeasurementRule::FeetOnly => {
                let caps = FEET_ONLY.captures(input)?;
                caps[1].parse().ok().map(Feet)
            }
            MeasurementRule::InchesOnly => {
                let caps = INCHES_ONLY.captures(input)?;
                caps[1].parse().ok().map(|inches| Inches(inches).into())
            }
            MeasurementRule::BareNumber => {
                let number: f64 = LEADING_NUMBER.find(input)?.as_str().parse().ok()?;
                if number > BARE_INCHES_THRESHOLD {
                    Some(Inches(number).into())
                } else {
                    Some(Feet(number))
                }
            }
        }
    }

    /// Short human-readable name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementRule::FeetAndInches => "feet-and-inches",
            MeasurementRule::FeetOnly => "feet",
            MeasurementRule::InchesOnly => "inches",
            MeasurementRule::BareNumber => "bare number",
        }
    }
}

/// Parse input and report which rule matched.
///
/// Returns `None` for empty or unparsable text.
pub fn parse_measurement(input: &str) -> Option<(MeasurementRule, Feet)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    MeasurementRule::ORDER
        .iter()
        .find_map(|rule| rule.apply(trimmed).map(|feet| (*rule, feet)))
}

/// Normalize a measurement string to decimal feet.
///
/// Never fails: empty or unparsable text yields `Feet(0.0)`. Positivity is
/// not checked here.
pub fn normalize_to_feet(input: &str) -> Feet {
    match parse_measurement(input) {
        Some((rule, feet)) => {
            tracing::trace!(input, rule = rule.name(), feet = feet.0, "normalized measurement");
            feet
        }
        None => {
            if !input.trim().is_empty() {
                tracing::warn!(input, "unrecognized measurement, treating as 0 ft");
            }
            Feet(0.0)
        }
    }
}
