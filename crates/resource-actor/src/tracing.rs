//! Tracing setup shared by binaries and integration tests.

/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate with environment-based
/// filtering: set `RUST_LOG` to control verbosity (`info`, `debug`,
/// `brigade=debug`, …).
///
/// Safe to call more than once; repeated initialization is ignored so tests
/// sharing a process do not panic.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; actors log entity_type instead
        .compact()
        .try_init();
}
