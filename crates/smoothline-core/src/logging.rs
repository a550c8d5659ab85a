//! Logging setup based on `tracing-subscriber`.
//!
//! The library crates only emit `tracing` events; binaries, demos and
//! benchmarks call one of these functions once at startup.

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,smoothline=debug,smoothline_core=debug";

/// Install a formatting subscriber.
///
/// Honors `RUST_LOG` and falls back to [`DEFAULT_FILTER`].
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Install a formatting subscriber with an explicit filter directive.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .try_init()
        .is_ok()
}
