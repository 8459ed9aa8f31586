#![forbid(unsafe_code)]

//! image-gate: rule-based pass/fail gate for container image analysis
//!
//! The gate reads a precomputed image analysis (efficiency, wasted bytes,
//! wasted user percentage) and checks it against configured thresholds so a
//! build pipeline can block inefficient images.

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod rules;
pub mod types;
pub mod units;

// Re-export error types for convenient access
pub use error::{AnalysisError, ByteSizeError, ConfigError, GateError, RuleError};

// Re-export core domain types for convenient access
pub use config::{ConfigSource, GateConfig};
pub use engine::{Evaluation, Evaluator, RuleOutcome};
pub use rules::{ConfigurableRule, Rule, RuleCatalog, RuleResult, RuleStatus};
pub use types::{AnalysisResult, RuleKey};
