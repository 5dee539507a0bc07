//! # Estimator Settings
//!
//! Defaults for new estimates, stored as JSON. Every field has a default, so
//! a settings file only needs the values it changes. Option fields sit at the
//! top level next to the default room size offered at the prompts.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::settings::EstimatorSettings;
//! use drywall_core::materials::StudSpacing;
//!
//! let json = r#"{ "waste_factor": 0.15, "stud_spacing": 24, "default_height": "9" }"#;
//! let settings = EstimatorSettings::from_json(json).unwrap();
//! assert_eq!(settings.options.waste_factor, 0.15);
//! assert_eq!(settings.options.stud_spacing, StudSpacing::Oc24);
//! assert!(!settings.options.include_ceiling);
//! assert_eq!(settings.default_height, "9");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationOptions;
use crate::errors::{CalcError, CalcResult};
use crate::validation::is_valid_measurement;

/// Environment variable naming a settings file for the CLI
pub const SETTINGS_ENV_VAR: &str = "DRYWALL_SETTINGS";

/// User-level defaults for new estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorSettings {
    /// Calculation options, stored at the top level of the JSON
    #[serde(flatten)]
    pub options: CalculationOptions,

    /// Room length offered when the prompt is left blank
    pub default_length: String,

    /// Room width offered when the prompt is left blank
    pub default_width: String,

    /// Wall height offered when the prompt is left blank
    pub default_height: String,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        EstimatorSettings {
            options: CalculationOptions::default(),
            default_length: "20".to_string(),
            default_width: "15".to_string(),
            default_height: "8".to_string(),
        }
    }
}

impl EstimatorSettings {
    /// Read, parse and validate a settings file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path, &e))?;
        let settings = Self::from_json(&json)?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from JSON text.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: EstimatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value is usable as an option or a prompt default.
    pub fn validate(&self) -> CalcResult<()> {
        self.options.validate().map_err(|err| match err {
            CalcError::InvalidInput { field, value, reason } => CalcError::InvalidInput {
                field: format!("settings.{}", field),
                value,
                reason,
            },
            other => other,
        })?;

        let defaults = [
            ("settings.default_length", &self.default_length),
            ("settings.default_width", &self.default_width),
            ("settings.default_height", &self.default_height),
        ];
        for (field, value) in defaults {
            if !is_valid_measurement(value) {
                return Err(CalcError::invalid_input(
                    field,
                    value.as_str(),
                    "Not a recognized measurement",
                ));
            }
        }
        Ok(())
    }

    /// Options for a new estimate
    pub fn to_options(&self) -> CalculationOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{DrywallThickness, SheetSize};

    #[test]
    fn test_defaults_match_options() {
        let settings = EstimatorSettings::default();
        assert_eq!(settings.to_options(), CalculationOptions::default());
        assert_eq!(settings.default_length, "20");
        assert_eq!(settings.default_width, "15");
        assert_eq!(settings.default_height, "8");
    }

    #[test]
    fn test_empty_json_is_default() {
        let settings = EstimatorSettings::from_json("{}").unwrap();
        assert_eq!(settings, EstimatorSettings::default());
    }

    #[test]
    fn test_options_are_flat_in_json() {
        let json = EstimatorSettings::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["waste_factor"], 0.1);
        assert_eq!(value["default_length"], "20");
        assert!(value.get("options").is_none());
    }

    #[test]
    fn test_roundtrip() {
        let settings = EstimatorSettings {
            options: CalculationOptions {
                include_ceiling: true,
                drywall_thickness: DrywallThickness::FiveEighthsInch,
                sheet_size: SheetSize::LARGE,
                ..Default::default()
            },
            default_height: "9'".to_string(),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains("5/8"));
        assert_eq!(EstimatorSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_waste_factor() {
        let err = EstimatorSettings::from_json(r#"{ "waste_factor": 0.9 }"#).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "settings.waste_factor"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_default_dimension() {
        let err = EstimatorSettings::from_json(r#"{ "default_width": "wide" }"#).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "settings.default_width"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_spacing() {
        let err = EstimatorSettings::from_json(r#"{ "stud_spacing": 18 }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_missing_file_is_file_error() {
        let path = std::env::temp_dir().join("drywall_settings_does_not_exist.json");
        let err = EstimatorSettings::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(err.to_string().starts_with("File error: read on '"));
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join("drywall_settings_load_test.json");
        fs::write(&path, r#"{ "include_studs": true, "default_length": "12'6\"" }"#).unwrap();
        let settings = EstimatorSettings::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert!(settings.options.include_studs);
        assert_eq!(settings.default_length, "12'6\"");
    }
}
