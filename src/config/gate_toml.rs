//! Parsing for `.image-gate.toml` configuration files
//!
//! The file holds a single `[rules]` table mapping rule keys to thresholds:
//!
//! ```toml
//! [rules]
//! lowestEfficiency = 0.95
//! highestWastedBytes = "20MB"
//! highestUserWastedPercent = "disabled"
//! ```
//!
//! Values are kept as strings; each rule parses its own value when it runs.

use crate::config::ConfigSource;
use crate::error::ConfigError;
use crate::rules::builtin::{
    BUILTIN_RULES, HIGHEST_USER_WASTED_PERCENT, HIGHEST_WASTED_BYTES, LOWEST_EFFICIENCY,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

/// Conventional name of the configuration file
pub const DEFAULT_CONFIG_FILE: &str = ".image-gate.toml";

/// Prefix for environment variable overrides
pub const DEFAULT_ENV_PREFIX: &str = "IMAGE_GATE";

/// Value that turns a rule off instead of giving it a threshold
pub const DISABLED_VALUE: &str = "disabled";

/// Resolved gate configuration
///
/// Lookups go through `ConfigSource` with dotted keys (`rules.<key>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateConfig {
    rules: BTreeMap<String, String>,
}

/// On-disk shape of the configuration file
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    rules: BTreeMap<String, toml::Value>,
}

impl GateConfig {
    /// Configuration with the stock thresholds
    pub fn with_defaults() -> Self {
        let mut config = Self::default();
        config.set(LOWEST_EFFICIENCY, "0.9");
        config.set(HIGHEST_WASTED_BYTES, DISABLED_VALUE);
        config.set(HIGHEST_USER_WASTED_PERCENT, "0.1");
        config
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file, falling back to the stock
    /// thresholds when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "configuration file not found, using default thresholds"
            );
            return Ok(Self::with_defaults());
        }
        Self::load(path)
    }

    /// Parse configuration from a TOML string
    ///
    /// Entries that name no known rule are kept (a custom catalog may use
    /// them) but logged.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(s)?;
        let mut rules = BTreeMap::new();
        for (key, value) in raw.rules {
            let value = stringify_value(&key, value)?;
            rules.insert(key, value);
        }

        let config = Self { rules };
        for key in config.unknown_keys() {
            tracing::warn!(rule = %key, "configuration names an unknown rule");
        }
        Ok(config)
    }

    /// Set the raw value of one rule, replacing any existing value
    pub fn set(&mut self, rule_key: impl Into<String>, value: impl Into<String>) {
        self.rules.insert(rule_key.into(), value.into());
    }

    /// Raw value of one rule, if configured
    pub fn rule_value(&self, rule_key: &str) -> Option<&str> {
        self.rules.get(rule_key).map(String::as_str)
    }

    /// Whether a rule is switched off with the `disabled` value
    pub fn is_rule_disabled(&self, rule_key: &str) -> bool {
        self.rule_value(rule_key).is_some_and(is_disabled_value)
    }

    /// Apply overrides from `<PREFIX>_RULES_<KEY>` environment variables
    ///
    /// The key part is the rule key upper-cased, e.g.
    /// `IMAGE_GATE_RULES_LOWESTEFFICIENCY`. Built-in rules and every rule
    /// already present in the file are checked.
    pub fn apply_env_overrides(&mut self, prefix: &str) {
        let mut keys: Vec<String> = BUILTIN_RULES
            .iter()
            .map(|(key, _)| key.to_string())
            .collect();
        keys.extend(self.rules.keys().cloned());
        keys.sort();
        keys.dedup();

        for key in keys {
            let var = format!("{}_RULES_{}", prefix, key.to_uppercase());
            if let Ok(value) = env::var(&var) {
                tracing::debug!(rule = %key, variable = %var, "configuration overridden from environment");
                self.set(key, value);
            }
        }
    }

    /// Fail if any configured rule is not a built-in
    pub fn validate_keys(&self) -> Result<(), ConfigError> {
        match self.unknown_keys().next() {
            Some(key) => Err(ConfigError::UnknownRule(key.to_string())),
            None => Ok(()),
        }
    }

    fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.rules
            .keys()
            .map(String::as_str)
            .filter(|key| !BUILTIN_RULES.iter().any(|(builtin, _)| builtin == key))
    }
}

impl ConfigSource for GateConfig {
    fn get_string(&self, key: &str) -> String {
        key.strip_prefix("rules.")
            .and_then(|rule_key| self.rule_value(rule_key))
            .unwrap_or_default()
            .to_string()
    }
}

/// Whether a raw rule value means "do not run this rule"
pub fn is_disabled_value(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(DISABLED_VALUE)
}

fn stringify_value(key: &str, value: toml::Value) -> Result<String, ConfigError> {
    match value {
        toml::Value::String(s) => Ok(s),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        other => Err(ConfigError::InvalidValue {
            field: format!("rules.{}", key),
            message: format!("expected a string or number, found {}", other.type_str()),
        }),
    }
}
