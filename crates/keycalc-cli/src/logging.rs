//! Log subscriber setup
//!
//! Logs go to stderr so `run` output on stdout stays machine-readable.
//! `RUST_LOG` takes precedence over the verbosity flags.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the filter for a verbosity level, honoring `RUST_LOG`
#[must_use]
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber; later calls are no-ops
pub fn init(verbosity: Verbosity) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(?verbosity, "logging initialized");
    }
}
