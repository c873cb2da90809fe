//! Tracing initialisation for the hook binaries.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// Hooks share the terminal with git, so nothing below warnings is printed
/// unless asked for. Only the first call takes effect.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .try_init()
        .ok();
}
