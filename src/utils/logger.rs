use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber once
///
/// Reads the filter from `RUST_LOG`, defaulting to `info`. Safe to call from
/// multiple tests or binaries; only the first call takes effect.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    });
}
