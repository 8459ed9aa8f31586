#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One rule record per rule, in catalog order
//! 2. One status record

use crate::engine::Evaluation;
use crate::rules::RuleStatus;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the evaluation as JSONL
    pub fn format(&self, evaluation: &Evaluation) -> String {
        let mut output = String::new();

        for outcome in &evaluation.outcomes {
            let record = RuleRecord {
                record_type: "rule",
                rule: &outcome.key,
                configuration: &outcome.configuration,
                status: outcome.status,
                message: &outcome.message,
            };
            push_record(&mut output, &record);
        }

        let status = StatusRecord {
            record_type: "status",
            passed: evaluation.passed(),
            exit_code: evaluation.exit_code(),
            total: evaluation.total() as u64,
            rules_passed: evaluation.count(RuleStatus::Passed) as u64,
            rules_failed: evaluation.count(RuleStatus::Failed) as u64,
            rules_warned: evaluation.count(RuleStatus::Warning) as u64,
            rules_skipped: evaluation.count(RuleStatus::Disabled) as u64,
        };
        push_record(&mut output, &status);

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, evaluation: &Evaluation) {
        print!("{}", self.format(evaluation));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record(output: &mut String, record: &impl Serialize) {
    match serde_json::to_string(record) {
        Ok(json) => {
            output.push_str(&json);
            output.push('\n');
        }
        Err(e) => tracing::warn!(error = %e, "failed to serialize JSONL record"),
    }
}

/// Rule record for JSONL output
#[derive(Debug, Serialize)]
struct RuleRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    rule: &'a str,
    configuration: &'a str,
    status: RuleStatus,
    message: &'a str,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    exit_code: i32,
    total: u64,
    rules_passed: u64,
    rules_failed: u64,
    rules_warned: u64,
    rules_skipped: u64,
}
