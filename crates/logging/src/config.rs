//! crates/logging/src/config.rs
//! Verbosity configuration derived from repeated `-v` flags.

use super::levels::Verbosity;

/// Tracing target used by the pattern engine.
pub const PATTERN_TARGET: &str = "vfsglob::pattern";

/// Per-category verbosity.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerbosityConfig {
    /// Level for every target without a more specific entry.
    pub general: Verbosity,
    /// Level for pattern compilation, decomposition and set algebra events.
    pub pattern: Verbosity,
}

impl VerbosityConfig {
    /// Creates a configuration from the number of `-v` flags given.
    ///
    /// | level | general | pattern |
    /// |-------|---------|---------|
    /// | 0     | warn    | warn    |
    /// | 1     | info    | info    |
    /// | 2     | info    | debug   |
    /// | 3+    | debug   | trace   |
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        let (general, pattern) = match level {
            0 => (Verbosity::Warn, Verbosity::Warn),
            1 => (Verbosity::Info, Verbosity::Info),
            2 => (Verbosity::Info, Verbosity::Debug),
            _ => (Verbosity::Debug, Verbosity::Trace),
        };
        Self { general, pattern }
    }

    /// A configuration that reports nothing.
    #[must_use]
    pub const fn quiet() -> Self {
        Self {
            general: Verbosity::Off,
            pattern: Verbosity::Off,
        }
    }

    /// Filter directives in `EnvFilter` syntax, e.g. `warn,vfsglob::pattern=debug`.
    #[must_use]
    pub fn directives(&self) -> String {
        format!("{},{}={}", self.general, PATTERN_TARGET, self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_flags_report_warnings() {
        let config = VerbosityConfig::from_verbose_level(0);
        assert_eq!(config, VerbosityConfig::default());
        assert_eq!(config.directives(), "warn,vfsglob::pattern=warn");
    }

    #[test]
    fn pattern_category_gets_louder_first() {
        let config = VerbosityConfig::from_verbose_level(2);
        assert_eq!(config.general, Verbosity::Info);
        assert_eq!(config.pattern, Verbosity::Debug);
    }

    #[test]
    fn high_levels_saturate() {
        assert_eq!(
            VerbosityConfig::from_verbose_level(9),
            VerbosityConfig::from_verbose_level(3)
        );
    }

    #[test]
    fn quiet_turns_everything_off() {
        assert_eq!(VerbosityConfig::quiet().directives(), "off,vfsglob::pattern=off");
    }
}
