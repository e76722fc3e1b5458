//! Diagnostic logging to stderr.

use std::io;

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at startup.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
