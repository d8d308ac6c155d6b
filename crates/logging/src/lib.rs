#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the command-line notion of verbosity (`-v`, `-vv`, ...)
//! into `tracing` filter directives for the vfsglob workspace and, with the
//! `tracing` feature, installs the subscriber that prints them.
//!
//! # Design
//!
//! - [`Verbosity`] is one step on the off/error/warn/info/debug/trace ladder.
//! - [`VerbosityConfig`] assigns a [`Verbosity`] to the general category and
//!   to the pattern engine's `vfsglob::pattern` target, and renders both as
//!   `EnvFilter` directives.
//! - `init_tracing` (feature `tracing`) installs a formatting subscriber on
//!   standard error. The `VFSGLOB_LOG` environment variable overrides the
//!   derived directives.
//!
//! # Invariants
//!
//! - More `-v` flags never make any category quieter.
//! - Diagnostics go to standard error only.
//!
//! # Examples
//!
//! ```
//! use logging::{Verbosity, VerbosityConfig};
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.pattern, Verbosity::Debug);
//! assert_eq!(config.directives(), "info,vfsglob::pattern=debug");
//! ```

mod config;
mod levels;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{PATTERN_TARGET, VerbosityConfig};
pub use levels::{ParseVerbosityError, Verbosity};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LOG_ENV, build_filter, init_tracing};
