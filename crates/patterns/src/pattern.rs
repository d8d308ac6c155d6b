use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::decompose::{Decomposition, decompose};
use crate::token::{Token, Tokenizer, render};

/// Immutable glob pattern text.
///
/// Every string is a valid pattern: characters other than `/`, `?` and `*`
/// are literals, and there is no escape syntax. The type exists so results of
/// the set operations can be told apart from arbitrary strings and so the
/// common queries are one method call away.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pattern {
    text: String,
}

impl Pattern {
    /// Wraps `text` as a pattern.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub(crate) fn from_tokens(tokens: &[Token]) -> Self {
        Self {
            text: render(tokens),
        }
    }

    /// The pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the pattern and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Lexes the pattern.
    #[must_use]
    pub fn tokens(&self) -> Tokenizer<'_> {
        Tokenizer::new(&self.text)
    }

    /// Returns `true` when the pattern contains a wildcard.
    #[must_use]
    pub fn is_glob(&self) -> bool {
        crate::is_glob_pattern(&self.text)
    }

    /// Splits the pattern into its literal prefix and wildcard suffix.
    #[must_use]
    pub fn decompose(&self) -> Decomposition<'_> {
        decompose(&self.text)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&Pattern> for Pattern {
    fn from(pattern: &Pattern) -> Self {
        pattern.clone()
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for Pattern {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Pattern {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
