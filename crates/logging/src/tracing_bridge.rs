//! crates/logging/src/tracing_bridge.rs
//! Installs a `tracing` subscriber configured from a [`VerbosityConfig`].
//!
//! Events are formatted to standard error so they never mix with a command's
//! regular output. Setting `VFSGLOB_LOG` to an `EnvFilter` directive string
//! replaces the directives derived from the verbosity configuration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//! tracing::debug!(target: "vfsglob::pattern", "pattern_compiled");
//! ```

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::config::VerbosityConfig;

/// Environment variable overriding the derived filter directives.
pub const LOG_ENV: &str = "VFSGLOB_LOG";

/// Builds the event filter for `config`, preferring [`LOG_ENV`] when it is
/// set to a valid directive string.
#[must_use]
pub fn build_filter(config: &VerbosityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.directives()))
}

/// Installs the global subscriber.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one stays in place.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    let filter = build_filter(&config);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}
