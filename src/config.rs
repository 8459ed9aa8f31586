//! Configuration accessors and `.image-gate.toml` parsing

pub mod gate_toml;
pub mod source;

pub use gate_toml::{
    DEFAULT_CONFIG_FILE, DEFAULT_ENV_PREFIX, DISABLED_VALUE, GateConfig, is_disabled_value,
};
pub use source::ConfigSource;
