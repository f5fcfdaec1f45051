//! Tracing setup
//!
//! Logs go to stderr so that plan output on stdout stays machine-readable.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "ENVELOPE_BALANCE_LOG";

static TRACING_INIT: Once = Once::new();

/// Build the filter from `ENVELOPE_BALANCE_LOG`, falling back to `default_filter`
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initializes the global tracing subscriber once per process
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(default_filter);
        // A subscriber may already be installed by an embedding application.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
