use tracing_subscriber::{EnvFilter, fmt};

/// Installs a stderr subscriber filtered by `RUST_LOG` (default: `warn`).
///
/// stdout is left for the parsed output.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .init();
}
