//! Error types for image-gate
//!
//! Rule evaluation never fails with an error: every problem a rule can hit is
//! reported as a `Failed` status. The types here cover the loading paths
//! around it (configuration files, analysis input, byte-size parsing).

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `[rules]` entry holds a value that cannot be read as a string
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A `[rules]` entry names no known rule
    #[error("Unknown rule: {0}")]
    UnknownRule(String),
}

/// Rule catalog errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Two rules share a key
    #[error("Duplicate rule key: {0}")]
    DuplicateKey(String),

    /// Rule not found
    #[error("Rule not found: {0}")]
    NotFound(String),
}

/// Errors raised while reading an analysis result
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Analysis file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Analysis JSON is malformed or has the wrong shape
    #[error("Invalid analysis JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric field is out of range
    #[error("Invalid analysis field {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Errors raised while parsing a human-readable byte size such as `10MB`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ByteSizeError {
    /// The numeric prefix is missing or malformed
    #[error("invalid number in byte size '{0}'")]
    InvalidNumber(String),

    /// The unit suffix is not a known size name
    #[error("unhandled size name: {0}")]
    UnknownUnit(String),

    /// The value does not fit in 64 bits
    #[error("too large: {0}")]
    TooLarge(String),
}

/// Top-level error type for image-gate
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule catalog error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Analysis input error
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
