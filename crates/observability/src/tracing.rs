//! Tracing/logging initialization.
//!
//! Output is one JSON object per event. `RUST_LOG` selects what is emitted; without
//! it, catalog crates log at `debug` and everything else at `info`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,catalog_client=debug,catalog_mock=debug";

pub fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/logging for the process.
///
/// Subsequent calls are no-ops (the global subscriber is already set).
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
