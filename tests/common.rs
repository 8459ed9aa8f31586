//! Test utilities for image-gate integration tests

#![allow(dead_code)]

use image_gate::AnalysisResult;
use std::collections::HashMap;
use std::path::PathBuf;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Path to a file under `tests/fixtures`
pub fn fixture_path(kind: &str, filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(kind)
        .join(filename)
}

/// Build a `rules.<key>` config map from `(key, value)` pairs
pub fn rules_config(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (format!("rules.{}", key), value.to_string()))
        .collect()
}

/// Analysis result with the three fields rules read
pub fn analysis(efficiency: f64, wasted_bytes: u64, wasted_user_percent: f64) -> AnalysisResult {
    AnalysisResult::new(efficiency, wasted_bytes, wasted_user_percent)
}

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}
