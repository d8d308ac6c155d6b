use crate::PatternError;

/// Default ceiling on the number of tokens accepted per pattern.
pub const DEFAULT_MAX_TOKENS: usize = 128;

/// Default ceiling on the number of search states visited by a set operation.
pub const DEFAULT_MAX_STATES: usize = 1 << 20;

/// Complexity ceilings applied before and during set operations.
///
/// Intersection and union are worst-case exponential in the number of
/// wildcards. Callers that accept externally supplied patterns should keep
/// these bounded; exceeding either ceiling fails with
/// [`PatternError::TooManyTokens`] or [`PatternError::TooManyStates`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    max_tokens: usize,
    max_states: usize,
}

impl Limits {
    /// Creates limits with explicit ceilings.
    #[must_use]
    pub const fn new(max_tokens: usize, max_states: usize) -> Self {
        Self {
            max_tokens,
            max_states,
        }
    }

    /// Limits that never trigger.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(usize::MAX, usize::MAX)
    }

    /// Maximum number of tokens per pattern.
    #[must_use]
    pub const fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    /// Maximum number of states a single set operation may visit.
    #[must_use]
    pub const fn max_states(&self) -> usize {
        self.max_states
    }

    /// Replaces the token ceiling.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Replaces the state ceiling.
    #[must_use]
    pub const fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    pub(crate) fn check_tokens(&self, pattern: &str, tokens: usize) -> Result<(), PatternError> {
        if tokens > self.max_tokens {
            crate::debug_pattern::trace_limit_exceeded("tokens", self.max_tokens);
            return Err(PatternError::TooManyTokens {
                pattern: pattern.to_owned(),
                tokens,
                limit: self.max_tokens,
            });
        }
        Ok(())
    }

    pub(crate) fn check_states(&self, visited: usize) -> Result<(), PatternError> {
        if visited > self.max_states {
            crate::debug_pattern::trace_limit_exceeded("states", self.max_states);
            return Err(PatternError::TooManyStates {
                limit: self.max_states,
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKENS, DEFAULT_MAX_STATES)
    }
}

/// Options shared by the matcher compiler and the set-algebra engine.
///
/// Matching is case-insensitive by default. The same setting governs how the
/// set operations compare literal characters so that their results agree with
/// the compiled matchers.
///
/// # Examples
///
/// ```
/// use patterns::{GlobOptions, Limits};
///
/// let options = GlobOptions::new()
///     .with_case_sensitive(true)
///     .with_limits(Limits::default().with_max_states(4096));
/// assert!(options.case_sensitive());
/// assert_eq!(options.limits().max_states(), 4096);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GlobOptions {
    case_sensitive: bool,
    limits: Limits,
}

impl GlobOptions {
    /// Case-insensitive matching with default limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case_sensitive: false,
            limits: Limits::new(DEFAULT_MAX_TOKENS, DEFAULT_MAX_STATES),
        }
    }

    /// Whether literal characters compare case-sensitively.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Complexity ceilings.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Sets case sensitivity.
    #[must_use]
    pub const fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Replaces the complexity ceilings.
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub(crate) fn chars_equal(&self, left: char, right: char) -> bool {
        left == right || (!self.case_sensitive && left.to_lowercase().eq(right.to_lowercase()))
    }
}
