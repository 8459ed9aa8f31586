#![forbid(unsafe_code)]

//! Plain-text report of an evaluation
//!
//! The layout is one line per rule followed by a summary line:
//!
//! ```text
//! Results:
//!   PASS: lowestEfficiency
//!   FAIL: highestWastedBytes: too many bytes wasted (wasted-bytes=15728640 > threshold=10000000)
//!   SKIP: highestUserWastedPercent: rule disabled
//!
//! Result:FAIL [Total:3] [Passed:1] [Failed:1] [Warn:0] [Skipped:1]
//! ```
//!
//! No color codes are emitted; callers decide how to emphasise labels.

use crate::engine::Evaluation;
use crate::rules::RuleStatus;

/// Human-readable formatter for evaluations
pub struct HumanFormatter {
    show_configuration: bool,
}

impl HumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        HumanFormatter {
            show_configuration: false,
        }
    }

    /// Also print the configured value of every rule
    pub fn with_configuration(mut self) -> Self {
        self.show_configuration = true;
        self
    }

    /// Format an evaluation for human consumption
    pub fn format(&self, evaluation: &Evaluation) -> String {
        let mut output = String::new();

        output.push_str("Results:\n");
        for outcome in &evaluation.outcomes {
            output.push_str(&format!("  {}: {}", outcome.status, outcome.key));
            if self.show_configuration {
                output.push_str(&format!(" (configured: '{}')", outcome.configuration));
            }
            if !outcome.message.is_empty() {
                output.push_str(&format!(": {}", outcome.message));
            }
            output.push('\n');
        }
        output.push('\n');

        let result = if evaluation.passed() {
            RuleStatus::Passed
        } else {
            RuleStatus::Failed
        };
        output.push_str(&format!(
            "Result:{} [Total:{}] [Passed:{}] [Failed:{}] [Warn:{}] [Skipped:{}]\n",
            result,
            evaluation.total(),
            evaluation.count(RuleStatus::Passed),
            evaluation.count(RuleStatus::Failed),
            evaluation.count(RuleStatus::Warning),
            evaluation.count(RuleStatus::Disabled),
        ));

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, evaluation: &Evaluation) {
        print!("{}", self.format(evaluation));
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}
