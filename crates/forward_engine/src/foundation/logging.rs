//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the `RUST_LOG` environment variable, defaulting to `info` when
/// unset. Call once at startup; binaries that configure `env_logger`
/// themselves should skip this.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
