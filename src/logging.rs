use tracing_subscriber::EnvFilter;

/// Initialise logging for a host embedding the overlay. The default level
/// is `debug` when the host asks for it and `info` otherwise; `RUST_LOG`
/// may override the filter only in the debug case, so a stray environment
/// variable cannot flood the event loop with per-segment traces.
pub fn init(debug: bool) {
    let fallback = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    } else {
        EnvFilter::new(fallback)
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
