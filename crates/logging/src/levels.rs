//! crates/logging/src/levels.rs
//! Verbosity steps shared by every diagnostic category.

use std::fmt;
use std::str::FromStr;

/// How much a category reports, from least to most.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Verbosity {
    /// Nothing at all.
    Off,
    /// Errors only.
    Error,
    /// Errors and warnings, such as complexity ceilings being hit.
    #[default]
    Warn,
    /// Summaries of completed work.
    Info,
    /// One event per compiled pattern or set operation.
    Debug,
    /// Everything, including per-decomposition events.
    Trace,
}

impl Verbosity {
    /// Directive spelling understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Error returned when parsing an unknown verbosity name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseVerbosityError {
    input: String,
}

impl fmt::Display for ParseVerbosityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown verbosity '{}'", self.input)
    }
}

impl std::error::Error for ParseVerbosityError {}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "quiet" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseVerbosityError {
                input: s.to_owned(),
            }),
        }
    }
}
