//! Helpers shared by the test suites.

/// Install a tracing subscriber for a test run.
///
/// Safe to call from every test, only the first
/// call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
