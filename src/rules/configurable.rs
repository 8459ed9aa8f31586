#![forbid(unsafe_code)]

//! Generic threshold rule bound to a config key and an evaluator closure

use crate::rules::{Rule, RuleResult};
use crate::types::{AnalysisResult, RuleKey};
use std::fmt;

/// Pure function that parses a raw config value and checks it against an analysis
pub type EvaluatorFn = Box<dyn Fn(&AnalysisResult, &str) -> RuleResult + Send + Sync>;

/// A rule defined by its key, its unparsed config value, and an evaluator
///
/// The config value is not validated on construction. The evaluator parses it
/// on every call, so a malformed threshold surfaces as a `Failed` result just
/// like an exceeded one.
pub struct ConfigurableRule {
    key: RuleKey,
    config_value: String,
    evaluator: EvaluatorFn,
}

impl ConfigurableRule {
    /// Creates a new rule
    ///
    /// # Arguments
    ///
    /// * `key` - Key the rule is configured under
    /// * `config_value` - Raw configuration value, parsed at evaluation time
    /// * `evaluator` - Function applied to the analysis and the raw value
    pub fn new<F>(key: RuleKey, config_value: impl Into<String>, evaluator: F) -> Self
    where
        F: Fn(&AnalysisResult, &str) -> RuleResult + Send + Sync + 'static,
    {
        Self {
            key,
            config_value: config_value.into(),
            evaluator: Box::new(evaluator),
        }
    }

    /// Returns the validated key
    pub fn rule_key(&self) -> &RuleKey {
        &self.key
    }
}

impl Rule for ConfigurableRule {
    fn key(&self) -> &str {
        self.key.as_str()
    }

    fn configuration(&self) -> &str {
        &self.config_value
    }

    fn evaluate(&self, analysis: &AnalysisResult) -> RuleResult {
        (self.evaluator)(analysis, &self.config_value)
    }
}

impl fmt::Debug for ConfigurableRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurableRule")
            .field("key", &self.key)
            .field("config_value", &self.config_value)
            .finish_non_exhaustive()
    }
}
