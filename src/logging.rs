//! Developer diagnostics.
//!
//! - **Tracing (this module)**: store loading, rendering and page writes are
//!   traced through `tracing`. Enabled with `RUST_LOG`, written to stderr.
//! - **Command output ([`crate::output`])**: the inventory and page list the
//!   user asked for, on stdout. Always printed, unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=insights_press=debug insights-press build
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
