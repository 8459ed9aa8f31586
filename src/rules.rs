#![forbid(unsafe_code)]

//! Rule definitions and catalog

pub mod builtin;
mod catalog;
mod configurable;
mod rule;
mod status;

// Re-export core types
pub use catalog::{RuleCatalog, load_rules};
pub use configurable::{ConfigurableRule, EvaluatorFn};
pub use rule::Rule;
pub use status::{RuleResult, RuleStatus};
