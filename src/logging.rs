use tracing_subscriber::EnvFilter;

/// Initialise logging. Defaults to `info`; pass `debug = true` (or set
/// `RUST_LOG`) for verbose output while poking at the native filters.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
