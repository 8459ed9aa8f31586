//! Rule evaluation and outcome aggregation

pub mod evaluator;

pub use evaluator::{EXIT_FAILED, EXIT_SUCCESS, Evaluation, Evaluator, RuleOutcome, evaluate_paths};
