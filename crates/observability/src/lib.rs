//! Tracing and logging setup shared by anything embedding the invoice tool.

/// Initialize process-wide logging with the default filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with_filter(tracing::DEFAULT_FILTER);
}

/// Initialize process-wide logging, falling back to `default_filter` when
/// `RUST_LOG` is unset or invalid.
pub fn init_with_filter(default_filter: &str) {
    tracing::init_with_filter(default_filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
