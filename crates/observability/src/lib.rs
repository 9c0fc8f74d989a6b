//! Process-wide logging setup shared by every binary in the workspace.

/// Initialize tracing/logging with the default filter (`info`).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Tracing subscriber configuration (filters, layers).
pub mod tracing;
