/// Error produced when a pattern cannot be compiled or a set operation is
/// refused.
///
/// Every operation either returns a complete result or one of these errors;
/// no search is started once an input has been rejected.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The input could not be interpreted as a pattern or path.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Lossy rendering of the rejected input.
        argument: String,
        /// Why the input was rejected.
        reason: &'static str,
    },

    /// A pattern carries more tokens than the configured ceiling allows.
    #[error("pattern '{pattern}' has {tokens} tokens, exceeding the limit of {limit}")]
    TooManyTokens {
        /// The offending pattern.
        pattern: String,
        /// Number of tokens the pattern lexes into.
        tokens: usize,
        /// Configured ceiling.
        limit: usize,
    },

    /// An intersection or union search visited more states than allowed.
    #[error("set operation exceeded the search limit of {limit} states")]
    TooManyStates {
        /// Configured ceiling.
        limit: usize,
    },

    /// The translated expression was rejected by the regex backend.
    #[error("failed to compile pattern '{pattern}': {source}")]
    Compile {
        /// The offending pattern.
        pattern: String,
        /// Error reported by the regex builder.
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Creates an [`PatternError::InvalidArgument`] for `argument`.
    pub(crate) fn invalid_argument(argument: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason,
        }
    }

    /// Returns `true` when the error stems from a complexity ceiling rather
    /// than from malformed input.
    #[must_use]
    pub const fn is_too_complex(&self) -> bool {
        matches!(self, Self::TooManyTokens { .. } | Self::TooManyStates { .. })
    }

    /// Returns the pattern the error refers to, when there is one.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::TooManyTokens { pattern, .. } | Self::Compile { pattern, .. } => Some(pattern),
            Self::InvalidArgument { .. } | Self::TooManyStates { .. } => None,
        }
    }
}
