//! # Settings
//!
//! Evaluation settings shared by the library and the CLI, loaded from TOML.
//! Every field has a default, so an empty file is valid.
//!
//! ## TOML Example
//!
//! ```toml
//! pivot_policy = "exactly_one"
//! reject_non_finite = true
//! display_precision = 4
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::solver::PivotPolicy;

/// Environment variable the CLI reads a settings path from
pub const CONFIG_ENV_VAR: &str = "PHYSEQ_CONFIG";

/// Default number of decimal places when printing results
pub const DEFAULT_DISPLAY_PRECISION: usize = 6;

/// Evaluation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How the pivot is chosen among missing quantities
    pub pivot_policy: PivotPolicy,

    /// Turn infinity/NaN results into `CalcError::NonFiniteResult`
    pub reject_non_finite: bool,

    /// Decimal places for human-readable output
    pub display_precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pivot_policy: PivotPolicy::FirstInOrder,
            reject_non_finite: false,
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl Settings {
    pub fn with_policy(mut self, policy: PivotPolicy) -> Self {
        self.pivot_policy = policy;
        self
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        toml::from_str(text).map_err(|e| CalcError::config_error("<inline>", e.to_string()))
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| CalcError::config_error(&display, e.to_string()))?;
        toml::from_str(&text).map_err(|e| CalcError::config_error(display, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_full_toml() {
        let settings = Settings::from_toml_str(
            r#"
            pivot_policy = "exactly_one"
            reject_non_finite = true
            display_precision = 3
            "#,
        )
        .unwrap();
        assert_eq!(settings.pivot_policy, PivotPolicy::ExactlyOne);
        assert!(settings.reject_non_finite);
        assert_eq!(settings.display_precision, 3);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Settings::from_toml_str("pivot = \"first\"").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_bad_policy_rejected() {
        assert!(Settings::from_toml_str("pivot_policy = \"last_in_order\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/physeq.toml").unwrap_err();
        match err {
            CalcError::ConfigError { path, .. } => assert_eq!(path, "/nonexistent/physeq.toml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("physeq-settings-{}.toml", std::process::id()));
        fs::write(&path, "display_precision = 2\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(settings.display_precision, 2);
        assert_eq!(settings.pivot_policy, PivotPolicy::FirstInOrder);
    }
}
