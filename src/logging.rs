//! Development-time tracing for the command-line tools.
//!
//! The library itself only emits `tracing` events; whether anything is
//! printed is the binary's decision. Each binary calls `init` once at
//! startup, after which `RUST_LOG` selects what reaches stderr:
//!
//! ```bash
//! RUST_LOG=algolab=debug puzzle_solver board.txt
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset. Output goes to
/// stderr in the compact format so it never mixes with result output on
/// stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
