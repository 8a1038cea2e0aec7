//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Lexitag tracing/logging system.
///
/// Reads the `LEXITAG_LOG` environment variable for per-subsystem log
/// levels, e.g. `LEXITAG_LOG=lexitag_engine=debug,lexitag_core=warn`.
/// Falls back to `lexitag=info` if `LEXITAG_LOG` is not set or invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("LEXITAG_LOG")
            .unwrap_or_else(|_| EnvFilter::new("lexitag=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .init();
    });
}
