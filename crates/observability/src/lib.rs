//! Tracing/logging setup shared by binaries.

/// Observability configuration read from the environment.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from `config`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &ObservabilityConfig) {
    tracing::init(config);
}

/// Initialize process-wide tracing from environment variables.
pub fn init_default() {
    init(&ObservabilityConfig::from_env());
}
