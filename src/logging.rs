//! Tracing setup for the binary
//!
//! Library code only emits events; the binary installs the subscriber once.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "wallets=warn";

/// Initializes the global tracing subscriber, writing to stderr
///
/// `verbose` raises the crate's level to debug regardless of `RUST_LOG`.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = if verbose {
            EnvFilter::new("wallets=debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        };

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
