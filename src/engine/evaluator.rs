#![forbid(unsafe_code)]

//! Evaluation driver: runs every rule in a catalog against an analysis
//!
//! The evaluator:
//! - Skips rules whose configured value is `disabled`, recording them as `Disabled`
//! - Runs every other rule and collects its status and message
//! - Fails the evaluation if any rule failed
//! - Evaluates batches of analyses in parallel using rayon

use crate::config::{ConfigSource, DEFAULT_ENV_PREFIX, GateConfig, is_disabled_value};
use crate::error::{GateError, RuleError};
use crate::rules::{Rule, RuleCatalog, RuleResult, RuleStatus};
use crate::types::AnalysisResult;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Exit code when every rule passed
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when at least one rule failed
pub const EXIT_FAILED: i32 = 1;

/// Outcome of one rule within an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub key: String,
    pub configuration: String,
    pub status: RuleStatus,
    pub message: String,
}

/// Outcomes of all rules for one analysis, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub outcomes: Vec<RuleOutcome>,
}

impl Evaluation {
    /// True unless some rule failed
    ///
    /// Warnings and skipped rules never fail the evaluation.
    pub fn passed(&self) -> bool {
        !self.outcomes.iter().any(|o| o.status.is_failure())
    }

    /// Process exit code for this evaluation
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILED
        }
    }

    /// Number of rules evaluated or skipped
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of outcomes with the given status
    pub fn count(&self, status: RuleStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// Outcome for a rule key, if the rule was part of the evaluation
    pub fn outcome(&self, key: &str) -> Option<&RuleOutcome> {
        self.outcomes.iter().find(|o| o.key == key)
    }

    /// Outcomes that failed
    pub fn failures(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_failure())
    }
}

/// Evaluation driver over a shared rule catalog
///
/// The catalog is immutable, so one evaluator can be used from many threads.
pub struct Evaluator {
    catalog: Arc<RuleCatalog>,
}

impl Evaluator {
    /// Creates an evaluator over the given catalog
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Creates an evaluator over the built-in rules bound to `config`
    pub fn from_config(config: &dyn ConfigSource) -> Self {
        Self::new(RuleCatalog::load(config))
    }

    /// The catalog this evaluator runs
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Run every rule in catalog order against one analysis
    pub fn evaluate(&self, analysis: &AnalysisResult) -> Evaluation {
        let outcomes = self
            .catalog
            .iter_rules()
            .map(|rule| run_rule(rule, analysis))
            .collect();
        let evaluation = Evaluation { outcomes };

        tracing::debug!(
            passed = evaluation.passed(),
            failed = evaluation.count(RuleStatus::Failed),
            skipped = evaluation.count(RuleStatus::Disabled),
            "evaluation finished"
        );
        evaluation
    }

    /// Run a single rule by key
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` if the catalog has no rule with this key.
    pub fn evaluate_rule(
        &self,
        key: &str,
        analysis: &AnalysisResult,
    ) -> Result<RuleOutcome, RuleError> {
        let rule = self
            .catalog
            .get_rule(key)
            .ok_or_else(|| RuleError::NotFound(key.to_string()))?;
        Ok(run_rule(rule, analysis))
    }

    /// Evaluate many analyses against the same catalog in parallel
    ///
    /// Results are returned in the order of `analyses`.
    pub fn evaluate_all(&self, analyses: &[AnalysisResult]) -> Vec<Evaluation> {
        analyses
            .par_iter()
            .map(|analysis| self.evaluate(analysis))
            .collect()
    }
}

/// Evaluate an analysis file against a configuration file
///
/// This:
/// 1. Loads the configuration (stock thresholds if the file is missing)
/// 2. Applies `IMAGE_GATE_RULES_*` environment overrides
/// 3. Loads the analysis JSON
/// 4. Runs every built-in rule
///
/// # Errors
///
/// Returns `GateError` if the configuration or the analysis cannot be read.
/// Rule failures are reported in the returned `Evaluation`, not as errors.
pub fn evaluate_paths(
    config_path: impl AsRef<Path>,
    analysis_path: impl AsRef<Path>,
) -> Result<Evaluation, GateError> {
    let mut config = GateConfig::load_or_default(config_path)?;
    config.apply_env_overrides(DEFAULT_ENV_PREFIX);

    let analysis = AnalysisResult::from_json_file(analysis_path)?;
    Ok(Evaluator::from_config(&config).evaluate(&analysis))
}

fn run_rule(rule: &dyn Rule, analysis: &AnalysisResult) -> RuleOutcome {
    let result = if is_disabled_value(rule.configuration()) {
        RuleResult::disabled()
    } else {
        rule.evaluate(analysis)
    };

    // Unknown is a rule bug; never let it reach the caller
    let result = if result.status == RuleStatus::Unknown {
        tracing::error!(rule = %rule.key(), "rule returned an unknown status");
        RuleResult::failed(format!("rule '{}' returned an unknown status", rule.key()))
    } else {
        result
    };

    tracing::debug!(
        rule = %rule.key(),
        status = %result.status,
        message = %result.message,
        "rule evaluated"
    );

    RuleOutcome {
        key: rule.key().to_string(),
        configuration: rule.configuration().to_string(),
        status: result.status,
        message: result.message,
    }
}
