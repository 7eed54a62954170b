use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr subscriber. `RUST_LOG` wins over `default_level`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
