//! Process-wide logging setup shared by the showcase binaries.

use tracing_subscriber::EnvFilter;

/// Install the JSON log subscriber for this process.
///
/// Verbosity comes from `RUST_LOG`, defaulting to `info`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
