#![forbid(unsafe_code)]

//! Built-in threshold rules
//!
//! Each built-in is a key plus a pure evaluator. Adding a rule means adding
//! an evaluator here and an entry to `BUILTIN_RULES`; the `Rule` trait and the
//! catalog do not change.

use crate::rules::RuleResult;
use crate::types::AnalysisResult;
use crate::units::parse_bytes;
use std::fmt::Display;

pub const LOWEST_EFFICIENCY: &str = "lowestEfficiency";
pub const HIGHEST_WASTED_BYTES: &str = "highestWastedBytes";
pub const HIGHEST_USER_WASTED_PERCENT: &str = "highestUserWastedPercent";

/// Signature shared by all built-in evaluators
pub type BuiltinEvaluator = fn(&AnalysisResult, &str) -> RuleResult;

/// Built-in rules in catalog order
pub const BUILTIN_RULES: &[(&str, BuiltinEvaluator)] = &[
    (LOWEST_EFFICIENCY, lowest_efficiency),
    (HIGHEST_WASTED_BYTES, highest_wasted_bytes),
    (HIGHEST_USER_WASTED_PERCENT, highest_user_wasted_percent),
];

/// Look up a built-in evaluator by rule key
pub fn builtin_evaluator(key: &str) -> Option<BuiltinEvaluator> {
    BUILTIN_RULES
        .iter()
        .find(|(builtin_key, _)| *builtin_key == key)
        .map(|(_, evaluator)| *evaluator)
}

/// Fails when the image efficiency drops below the configured floor
pub fn lowest_efficiency(analysis: &AnalysisResult, value: &str) -> RuleResult {
    let threshold: f64 = match value.parse() {
        Ok(threshold) => threshold,
        Err(e) => return invalid_config(value, e),
    };
    if threshold > analysis.efficiency {
        return RuleResult::failed(format!(
            "image efficiency is too low (efficiency={} < threshold={})",
            analysis.efficiency, threshold
        ));
    }
    RuleResult::passed()
}

/// Fails when more bytes are wasted than the configured size allows
pub fn highest_wasted_bytes(analysis: &AnalysisResult, value: &str) -> RuleResult {
    let threshold = match parse_bytes(value) {
        Ok(threshold) => threshold,
        Err(e) => return invalid_config(value, e),
    };
    if analysis.wasted_bytes > threshold {
        return RuleResult::failed(format!(
            "too many bytes wasted (wasted-bytes={} > threshold={})",
            analysis.wasted_bytes, threshold
        ));
    }
    RuleResult::passed()
}

/// Fails when wasted bytes relative to user-added bytes exceed the ceiling
pub fn highest_user_wasted_percent(analysis: &AnalysisResult, value: &str) -> RuleResult {
    let threshold: f64 = match value.parse() {
        Ok(threshold) => threshold,
        Err(e) => return invalid_config(value, e),
    };
    if threshold < analysis.wasted_user_percent {
        return RuleResult::failed(format!(
            "too many bytes wasted, relative to the user bytes added (%-user-wasted-bytes={} > threshold={})",
            analysis.wasted_user_percent, threshold
        ));
    }
    RuleResult::passed()
}

fn invalid_config(value: &str, err: impl Display) -> RuleResult {
    RuleResult::failed(format!("invalid config value ('{}'): {}", value, err))
}
