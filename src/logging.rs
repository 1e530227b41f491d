//! Console logging setup using `tracing-subscriber`.
//!
//! The demo binary emits all of its narration as `tracing` events, so a
//! single console subscriber is the whole observability surface.

use tracing_subscriber::EnvFilter;

/// Initialise console logging for the demo binary.
///
/// Emits human-readable output to stderr, controlled by the `RUST_LOG`
/// environment variable (default: `info`).
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
