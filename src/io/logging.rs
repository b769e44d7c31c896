//! Diagnostic logging setup

use crate::io::configuration::{DEFAULT_LOG_FILTER, TRACE_LOG_FILTER, VERBOSE_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count, ignoring `RUST_LOG`
pub const fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => VERBOSE_LOG_FILTER,
        _ => TRACE_LOG_FILTER,
    }
}

/// Install the global subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over the verbosity count. Returns false when a
/// subscriber was already installed, which leaves the existing one in place.
pub fn init_logging(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
