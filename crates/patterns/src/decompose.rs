use std::fmt;

use crate::segment::{Segments, split_path};
use crate::token::{Token, Tokenizer};

/// Number of directory levels a pattern suffix spans.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SuffixDepth {
    /// The suffix spans exactly this many path segments.
    Bounded(usize),
    /// The suffix contains `**` and may span any number of segments.
    Unbounded,
}

impl SuffixDepth {
    /// Returns `true` for [`SuffixDepth::Unbounded`].
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// The bounded depth, if any.
    #[must_use]
    pub const fn bounded(self) -> Option<usize> {
        match self {
            Self::Bounded(depth) => Some(depth),
            Self::Unbounded => None,
        }
    }

    /// Returns `true` when a directory `depth` levels below the prefix may
    /// still contain matches and therefore has to be enumerated.
    #[must_use]
    pub const fn reaches(self, depth: usize) -> bool {
        match self {
            Self::Bounded(limit) => depth < limit,
            Self::Unbounded => true,
        }
    }
}

impl fmt::Display for SuffixDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(depth) => write!(f, "{depth}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// A pattern split into a wildcard-free prefix and a wildcard-bearing suffix.
///
/// The prefix ends at the last `/` preceding the first wildcard, so it names
/// a directory that can be opened directly. `prefix + suffix` always
/// reproduces the original pattern.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Decomposition<'a> {
    pattern: &'a str,
    split: usize,
    suffix_depth: SuffixDepth,
}

impl<'a> Decomposition<'a> {
    /// The pattern this decomposition was computed from.
    #[must_use]
    pub const fn pattern(&self) -> &'a str {
        self.pattern
    }

    /// Constant leading part; never contains a wildcard.
    #[must_use]
    pub fn prefix(&self) -> &'a str {
        &self.pattern[..self.split]
    }

    /// Remaining part starting at the segment of the first wildcard.
    #[must_use]
    pub fn suffix(&self) -> &'a str {
        &self.pattern[self.split..]
    }

    /// Directory levels spanned by the suffix.
    #[must_use]
    pub const fn suffix_depth(&self) -> SuffixDepth {
        self.suffix_depth
    }

    /// Returns `true` when the pattern has no wildcard at all.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.split == self.pattern.len()
    }

    /// Directory segments of the prefix, without the trailing separator.
    ///
    /// For a literal pattern this yields every segment of the pattern.
    #[must_use]
    pub fn prefix_segments(&self) -> Segments<'a> {
        let prefix = self.prefix();
        split_path(prefix.strip_suffix('/').unwrap_or(prefix))
    }
}

/// Splits `pattern` into its literal prefix and wildcard suffix.
///
/// Runs a single pass over the tokens. The prefix boundary is the byte after
/// the last `/` seen before the first wildcard. The suffix depth counts the
/// suffix's path segments (a trailing separator does not open a new level)
/// and saturates to [`SuffixDepth::Unbounded`] as soon as a `**` appears.
///
/// # Examples
///
/// ```
/// use patterns::{SuffixDepth, decompose};
///
/// let parts = decompose("dir/dir/*/*.txt");
/// assert_eq!(parts.prefix(), "dir/dir/");
/// assert_eq!(parts.suffix(), "*/*.txt");
/// assert_eq!(parts.suffix_depth(), SuffixDepth::Bounded(2));
///
/// let literal = decompose("dir/dir/file.txt");
/// assert_eq!(literal.prefix(), "dir/dir/file.txt");
/// assert_eq!(literal.suffix(), "");
/// assert_eq!(literal.suffix_depth(), SuffixDepth::Bounded(0));
/// ```
#[must_use]
pub fn decompose(pattern: &str) -> Decomposition<'_> {
    let mut boundary = 0;
    let mut wildcard_seen = false;
    let mut depth = 0usize;
    let mut unbounded = false;
    let mut ends_with_slash = false;

    for (offset, token) in Tokenizer::new(pattern) {
        ends_with_slash = token == Token::Slash;
        if wildcard_seen {
            match token {
                Token::Slash => depth += 1,
                Token::StarStar => unbounded = true,
                Token::QuestionMark | Token::Star | Token::Char(_) => {}
            }
            continue;
        }
        match token {
            Token::Slash => boundary = offset + 1,
            Token::QuestionMark | Token::Star | Token::StarStar => {
                wildcard_seen = true;
                depth = 1;
                unbounded = token == Token::StarStar;
            }
            Token::Char(_) => {}
        }
    }

    let (split, suffix_depth) = if !wildcard_seen {
        (pattern.len(), SuffixDepth::Bounded(0))
    } else if unbounded {
        (boundary, SuffixDepth::Unbounded)
    } else {
        if ends_with_slash {
            depth -= 1;
        }
        (boundary, SuffixDepth::Bounded(depth))
    };

    crate::debug_pattern::trace_pattern_decomposed(pattern, &pattern[..split], suffix_depth);

    Decomposition {
        pattern,
        split,
        suffix_depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_without_separator_has_empty_prefix() {
        let parts = decompose("*.txt");
        assert_eq!(parts.prefix(), "");
        assert_eq!(parts.suffix(), "*.txt");
        assert_eq!(parts.suffix_depth(), SuffixDepth::Bounded(1));
        assert!(!parts.is_literal());
    }

    #[test]
    fn wildcard_mid_segment_keeps_segment_in_suffix() {
        let parts = decompose("src/mod?/lib.rs");
        assert_eq!(parts.prefix(), "src/");
        assert_eq!(parts.suffix(), "mod?/lib.rs");
        assert_eq!(parts.suffix_depth(), SuffixDepth::Bounded(2));
    }

    #[test]
    fn globstar_saturates_depth() {
        let parts = decompose("logs/**/*.log");
        assert_eq!(parts.prefix(), "logs/");
        assert_eq!(parts.suffix_depth(), SuffixDepth::Unbounded);

        let late = decompose("a/*/b/**");
        assert_eq!(late.prefix(), "a/");
        assert!(late.suffix_depth().is_unbounded());
    }

    #[test]
    fn trailing_separator_does_not_add_a_level() {
        let parts = decompose("cache/*/");
        assert_eq!(parts.suffix(), "*/");
        assert_eq!(parts.suffix_depth(), SuffixDepth::Bounded(1));
    }

    #[test]
    fn empty_pattern_is_literal() {
        let parts = decompose("");
        assert!(parts.is_literal());
        assert_eq!(parts.prefix(), "");
        assert_eq!(parts.suffix_depth(), SuffixDepth::Bounded(0));
    }

    #[test]
    fn prefix_segments_drop_trailing_separator() {
        let parts = decompose("a/b/*.c");
        let segments: Vec<_> = parts.prefix_segments().map(|s| s.as_str()).collect();
        assert_eq!(segments, ["a", "b"]);
    }

    #[test]
    fn depth_reach_bounds_enumeration() {
        assert!(SuffixDepth::Bounded(2).reaches(1));
        assert!(!SuffixDepth::Bounded(2).reaches(2));
        assert!(SuffixDepth::Unbounded.reaches(1000));
        assert_eq!(SuffixDepth::Bounded(3).bounded(), Some(3));
        assert_eq!(SuffixDepth::Unbounded.to_string(), "unbounded");
    }
}
