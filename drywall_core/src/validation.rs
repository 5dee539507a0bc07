//! # Input Validation
//!
//! Gates raw dimension text before it reaches the calculator.
//!
//! Validation runs in two stages:
//!
//! 1. **Pattern** - each field must look like `8`, `8'`, `96"` or `8'6"`.
//!    If any field fails, only the pattern errors are returned.
//! 2. **Range** - fields are normalized with
//!    [`normalize_to_feet`](crate::measurement::normalize_to_feet) and checked
//!    against [`LENGTH_LIMITS_FT`], [`WIDTH_LIMITS_FT`] and [`HEIGHT_LIMITS_FT`].
//!    Every out-of-range field is reported.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::validation::validate_room_dimensions;
//!
//! assert!(validate_room_dimensions("20", "15", "8").valid);
//!
//! let result = validate_room_dimensions("1", "15", "8");
//! assert_eq!(result.errors, vec!["Length must be between 2 and 200 feet"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{StudSpacing, MAX_WASTE_FACTOR};
use crate::measurement::normalize_to_feet;

/// Accepted length range (ft), inclusive
pub const LENGTH_LIMITS_FT: (f64, f64) = (2.0, 200.0);

/// Accepted width range (ft), inclusive
pub const WIDTH_LIMITS_FT: (f64, f64) = (2.0, 200.0);

/// Accepted wall height range (ft), inclusive
pub const HEIGHT_LIMITS_FT: (f64, f64) = (6.0, 30.0);

static MEASUREMENT_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        // 8 or 8.5
        Regex::new(r"^\d+(?:\.\d+)?$").expect("plain number pattern is valid"),
        // 8' or 8.5'
        Regex::new(r"^\d+(?:\.\d+)?'$").expect("feet pattern is valid"),
        // 96" or 96.5"
        Regex::new(r#"^\d+(?:\.\d+)?"$"#).expect("inches pattern is valid"),
        // 8'6" or 8' 6.5"
        Regex::new(r#"^\d+(?:\.\d+)?'\s*\d+(?:\.\d+)?"$"#)
            .expect("feet-and-inches pattern is valid"),
    ]
});

/// Room dimension being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionField {
    Length,
    Width,
    Height,
}

impl DimensionField {
    /// Name used at the start of error messages
    pub fn name(&self) -> &'static str {
        match self {
            DimensionField::Length => "Length",
            DimensionField::Width => "Width",
            DimensionField::Height => "Height",
        }
    }

    /// Inclusive (min, max) in feet
    pub fn limits_ft(&self) -> (f64, f64) {
        match self {
            DimensionField::Length => LENGTH_LIMITS_FT,
            DimensionField::Width => WIDTH_LIMITS_FT,
            DimensionField::Height => HEIGHT_LIMITS_FT,
        }
    }

    fn pattern_error(&self) -> String {
        format!("{} must be a valid measurement", self.name())
    }

    fn range_error(&self) -> String {
        let (min, max) = self.limits_ft();
        format!("{} must be between {} and {} feet", self.name(), min, max)
    }
}

/// Outcome of [`validate_room_dimensions`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Messages in field order; empty when valid
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        ValidationResult {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert to a `Result` for `?`-style callers.
    pub fn into_result(self) -> CalcResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(CalcError::ValidationFailed { errors: self.errors })
        }
    }
}

/// Check whether text looks like a supported measurement.
///
/// Stricter than the normalizer: only digits with an optional foot mark,
/// inch mark, or both.
pub fn is_valid_measurement(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }
    MEASUREMENT_PATTERNS.iter().any(|pattern| pattern.is_match(trimmed))
}

/// Validate raw room dimensions against format and construction limits.
pub fn validate_room_dimensions(length: &str, width: &str, height: &str) -> ValidationResult {
    let fields = [
        (DimensionField::Length, length),
        (DimensionField::Width, width),
        (DimensionField::Height, height),
    ];

    let pattern_errors: Vec<String> = fields
        .iter()
        .filter(|(_, raw)| !is_valid_measurement(raw))
        .map(|(field, _)| field.pattern_error())
        .collect();

    if !pattern_errors.is_empty() {
        tracing::debug!(errors = pattern_errors.len(), "measurement format errors");
        return ValidationResult::from_errors(pattern_errors);
    }

    let range_errors: Vec<String> = fields
        .iter()
        .filter(|(field, raw)| {
            let feet = normalize_to_feet(raw).value();
            let (min, max) = field.limits_ft();
            !(min..=max).contains(&feet)
        })
        .map(|(field, _)| field.range_error())
        .collect();

    if !range_errors.is_empty() {
        tracing::debug!(errors = range_errors.len(), "dimension range errors");
    }
    ValidationResult::from_errors(range_errors)
}

/// Waste allowance must be a fraction in [0, 0.5].
pub fn is_valid_waste_factor(factor: f64) -> bool {
    (0.0..=MAX_WASTE_FACTOR).contains(&factor)
}

/// Stud spacing must be one of 12, 16, 19.2 or 24 inches.
pub fn is_valid_stud_spacing(spacing_in: f64) -> bool {
    StudSpacing::from_inches(spacing_in).is_some()
}

/// Strip everything except digits, `.`, `'`, `"` and spaces, then trim.
///
/// ```rust
/// use drywall_core::validation::sanitize_input;
///
/// assert_eq!(sanitize_input(" 8ft 6in "), "8 6");
/// assert_eq!(sanitize_input("12'6\"<script>"), "12'6\"");
/// ```
pub fn sanitize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '\'' | '"' | ' '))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Join messages one per line for display.
pub fn format_error_message(errors: &[String]) -> String {
    errors.join("\n")
}
