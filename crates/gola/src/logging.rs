//! Diagnostics go to stderr so the child's stdout stays untouched.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Filter directives, e.g. `GOLA_LOG=gola_shim=debug`.
pub const LOG_ENV: &str = "GOLA_LOG";

const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}
