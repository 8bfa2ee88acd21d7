//! Tracing subscriber bootstrap.
//!
//! Filter directives come from `SCROLL_SYNC_LOG`, then `RUST_LOG`, then the
//! built-in default of `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted first for filter directives.
pub const LOG_ENV_VAR: &str = "SCROLL_SYNC_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a formatting subscriber. Returns false when a global subscriber
/// was already set, so calling this more than once is harmless.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Like [`init_tracing`], but writes through the test harness capture.
pub fn init_test_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}
