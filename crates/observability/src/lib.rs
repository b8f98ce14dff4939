//! Process-wide logging setup shared by the catalog binaries and tests.

/// Initialize tracing/logging. Safe to call more than once.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
