// tests/common.rs
//! Shared test utilities — logging setup

/// Route tracing output through the test writer when the logging feature is on.
/// Idempotent — safe to call from every test.
pub fn setup() {
    #[cfg(feature = "logging")]
    suite_harness::logging::init_for_tests();

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}
