//! Tracing/logging setup shared by hosts of the catalog engine.
//!
//! The engine crates only emit `tracing` events; a host process (dashboard
//! backend, test harness, bench) decides where they go by calling one of the
//! initializers here.

/// Subscriber configuration (filters, formatters).
pub mod tracing;

/// Initialize process-wide JSON logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize human-readable logging captured by the test harness.
pub fn init_for_tests() {
    tracing::init_for_tests();
}
