//! Logging initialization for CLI and test harness use.
//!
//! Wires a `tracing` subscriber with an env-filter so register and store
//! events show up on stderr. Enabled with the `console` feature.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the tracing subscriber.
///
/// Safe to call multiple times - only the first call has effect. Defaults to
/// `info` for the riskledger crates; override with `RUST_LOG`.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("riskledger_register=info,riskledger_store=info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
