//! Tracing setup for callers embedding the gate
//!
//! The library only emits `tracing` events. Callers that want them printed
//! install a subscriber here or bring their own.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "IMAGE_GATE_LOG";

/// Install a stderr subscriber filtered by `IMAGE_GATE_LOG`
///
/// Defaults to `warn` if the variable is unset or invalid. Does nothing if a
/// global subscriber is already installed.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    install(filter);
}

/// Install a stderr subscriber with an explicit filter string
pub fn init_logging_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
