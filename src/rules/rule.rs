#![forbid(unsafe_code)]

//! Core Rule trait

use crate::rules::RuleResult;
use crate::types::AnalysisResult;

/// Trait that all rules must implement
///
/// A rule is a named, configured check over one analysis result.
/// The trait is `Send + Sync` so a catalog can be shared across threads.
pub trait Rule: Send + Sync {
    /// Returns the unique key this rule is configured under
    fn key(&self) -> &str;

    /// Returns the raw configuration value bound at construction time
    fn configuration(&self) -> &str;

    /// Evaluates the rule against an analysis result
    ///
    /// Problems with the bound configuration are reported as a `Failed`
    /// result, never as a panic. Implementations must not return `Unknown`.
    fn evaluate(&self, analysis: &AnalysisResult) -> RuleResult;
}
