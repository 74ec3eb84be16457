//! Tracing setup for binaries and tests that use this crate.
//!
//! Library code only emits events through `tracing`; nothing is printed
//! unless a subscriber is installed.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default
/// `warn`). Calling it again once a subscriber is set does nothing.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
