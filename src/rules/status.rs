#![forbid(unsafe_code)]

//! Rule outcomes

use serde::Serialize;
use std::fmt;

/// Outcome kind of a single rule evaluation
///
/// Statuses are categorical; there is no ordering between them.
/// `Unknown` is the zero value and is never a legitimate evaluation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RuleStatus {
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "pass")]
    Passed,
    #[serde(rename = "fail")]
    Failed,
    #[serde(rename = "warn")]
    Warning,
    #[serde(rename = "skip")]
    Disabled,
}

impl RuleStatus {
    /// Fixed display label for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStatus::Passed => "PASS",
            RuleStatus::Failed => "FAIL",
            RuleStatus::Warning => "WARN",
            RuleStatus::Disabled => "SKIP",
            RuleStatus::Unknown => "Unknown",
        }
    }

    /// Whether this status blocks the pipeline
    pub fn is_failure(&self) -> bool {
        matches!(self, RuleStatus::Failed)
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status and message produced by one rule evaluation
///
/// The message is empty on success and explains the outcome otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleResult {
    pub status: RuleStatus,
    pub message: String,
}

impl RuleResult {
    pub fn new(status: RuleStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn passed() -> Self {
        Self::new(RuleStatus::Passed, "")
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(RuleStatus::Failed, message)
    }

    pub fn disabled() -> Self {
        Self::new(RuleStatus::Disabled, "rule disabled")
    }
}
