//! Tracing/logging initialization.
//!
//! Output is one JSON object per event. `RUST_LOG` always wins over the
//! filter passed in by the caller.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the caller names one.
pub const DEFAULT_FILTER: &str = "info";

/// Resolve the effective filter: `RUST_LOG` if it parses, else `default_filter`,
/// else [`DEFAULT_FILTER`].
pub fn resolve_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON subscriber. Only the first call in a process takes effect.
pub fn init_with_filter(default_filter: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(default_filter))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        ::tracing::debug!(default_filter, "logging initialized");
    }
}
