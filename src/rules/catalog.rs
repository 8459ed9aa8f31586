#![forbid(unsafe_code)]

//! Rule catalog: the ordered set of rules built from configuration
//!
//! The catalog resolves each built-in key's raw value from a `ConfigSource`
//! and binds it to the matching evaluator. It does not validate values;
//! a missing or malformed threshold is reported when the rule runs.

use crate::config::ConfigSource;
use crate::error::RuleError;
use crate::rules::builtin::BUILTIN_RULES;
use crate::rules::{ConfigurableRule, Rule};
use crate::types::RuleKey;

/// Ordered collection of rules
///
/// Iteration order is insertion order, which for a loaded catalog is the
/// built-in order. Keys are unique.
pub struct RuleCatalog {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build the catalog of built-in rules from configuration
    ///
    /// Each rule's value is read from `rules.<key>`. Missing keys resolve to
    /// the empty string, which every built-in rejects as invalid.
    pub fn load(config: &dyn ConfigSource) -> Self {
        let mut catalog = Self::new();
        for (key, evaluator) in BUILTIN_RULES {
            let Some(rule_key) = RuleKey::new(*key) else {
                continue;
            };
            let value = config.get_string(&rule_key.config_path());
            tracing::debug!(rule = %rule_key, value = %value, "loaded rule");
            catalog
                .rules
                .push(Box::new(ConfigurableRule::new(rule_key, value, *evaluator)));
        }
        catalog
    }

    /// Add a rule to the end of the catalog
    ///
    /// # Errors
    ///
    /// Returns `RuleError::DuplicateKey` if a rule with the same key is
    /// already present.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) -> Result<(), RuleError> {
        if self.get_rule(rule.key()).is_some() {
            return Err(RuleError::DuplicateKey(rule.key().to_string()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Get a rule by its key
    pub fn get_rule(&self, key: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.key() == key)
            .map(|boxed| boxed.as_ref())
    }

    /// Iterate over all rules in catalog order
    pub fn iter_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|boxed| boxed.as_ref())
    }

    /// Keys of all rules in catalog order
    pub fn keys(&self) -> Vec<&str> {
        self.iter_rules().map(|rule| rule.key()).collect()
    }

    /// Get the number of rules in the catalog
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the built-in rule list from configuration
pub fn load_rules(config: &dyn ConfigSource) -> Vec<Box<dyn Rule>> {
    RuleCatalog::load(config).rules
}
