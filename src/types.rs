#![forbid(unsafe_code)]

//! Core domain types for image-gate
//!
//! This module defines the analysis input consumed by rules and the
//! validated identifier every rule is addressed by.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Summary of an inspected image, produced upstream by the image analyzer
///
/// Rules only read this value. Field names follow the analyzer's JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Fraction of image bytes that are not wasted, in `[0, 1]`
    pub efficiency: f64,

    /// Bytes duplicated or removed across layers
    pub wasted_bytes: u64,

    /// Wasted bytes relative to the bytes added by user layers
    pub wasted_user_percent: f64,

    /// Total image size in bytes
    #[serde(default)]
    pub size_bytes: u64,

    /// Bytes added by layers above the base image
    #[serde(default)]
    pub user_size_bytes: u64,
}

impl AnalysisResult {
    /// Creates a result from the three fields rules consume
    pub fn new(efficiency: f64, wasted_bytes: u64, wasted_user_percent: f64) -> Self {
        Self {
            efficiency,
            wasted_bytes,
            wasted_user_percent,
            ..Self::default()
        }
    }

    /// Parse and validate an analysis result from JSON
    pub fn from_json_str(s: &str) -> Result<Self, AnalysisError> {
        let result: AnalysisResult = serde_json::from_str(s)?;
        result.validate()?;
        Ok(result)
    }

    /// Load and validate an analysis result from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        for (field, value) in [
            ("efficiency", self.efficiency),
            ("wastedUserPercent", self.wasted_user_percent),
        ] {
            if !value.is_finite() {
                return Err(AnalysisError::Invalid {
                    field: field.to_string(),
                    message: format!("expected a finite number, got {}", value),
                });
            }
            if value < 0.0 {
                return Err(AnalysisError::Invalid {
                    field: field.to_string(),
                    message: format!("expected a non-negative number, got {}", value),
                });
            }
        }
        Ok(())
    }
}

/// A validated rule key
///
/// Keys must be non-empty and contain only alphanumeric characters, hyphens,
/// and underscores, so that `rules.<key>` is always a well-formed config path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleKey(String);

impl RuleKey {
    /// Creates a new RuleKey, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() {
            return None;
        }
        if !key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(RuleKey(key))
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the configuration path this key is looked up under
    pub fn config_path(&self) -> String {
        format!("rules.{}", self.0)
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleKey::new(value).ok_or_else(|| "Invalid rule key".to_string())
    }
}

impl From<RuleKey> for String {
    fn from(key: RuleKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_key_validation() {
        assert!(RuleKey::new("lowestEfficiency").is_some());
        assert!(RuleKey::new("rule_123").is_some());
        assert!(RuleKey::new("highest-wasted").is_some());
        assert!(RuleKey::new("").is_none());
        assert!(RuleKey::new("invalid rule").is_none());
        assert!(RuleKey::new("rules.nested").is_none());
    }

    #[test]
    fn test_rule_key_config_path() {
        let key = RuleKey::new("lowestEfficiency").unwrap();
        assert_eq!(key.config_path(), "rules.lowestEfficiency");
        assert_eq!(key.to_string(), "lowestEfficiency");
    }

    #[test]
    fn test_analysis_from_json() {
        let json = r#"{
            "efficiency": 0.95,
            "wastedBytes": 5242880,
            "wastedUserPercent": 0.02,
            "sizeBytes": 104857600
        }"#;
        let result = AnalysisResult::from_json_str(json).unwrap();
        assert_eq!(result.efficiency, 0.95);
        assert_eq!(result.wasted_bytes, 5_242_880);
        assert_eq!(result.wasted_user_percent, 0.02);
        assert_eq!(result.size_bytes, 104_857_600);
        assert_eq!(result.user_size_bytes, 0);
    }

    #[test]
    fn test_analysis_missing_required_field() {
        let json = r#"{ "efficiency": 0.95, "wastedBytes": 10 }"#;
        let err = AnalysisResult::from_json_str(json).unwrap_err();
        assert!(matches!(err, AnalysisError::Json(_)));
    }

    #[test]
    fn test_analysis_negative_wasted_bytes_rejected() {
        let json = r#"{ "efficiency": 0.95, "wastedBytes": -1, "wastedUserPercent": 0.0 }"#;
        assert!(AnalysisResult::from_json_str(json).is_err());
    }

    #[test]
    fn test_analysis_negative_percent_rejected() {
        let json = r#"{ "efficiency": -0.5, "wastedBytes": 0, "wastedUserPercent": 0.0 }"#;
        let err = AnalysisResult::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("efficiency"));
    }

    #[test]
    fn test_analysis_new_defaults_informational_fields() {
        let result = AnalysisResult::new(0.5, 42, 1.5);
        assert_eq!(result.size_bytes, 0);
        assert_eq!(result.user_size_bytes, 0);
    }
}
