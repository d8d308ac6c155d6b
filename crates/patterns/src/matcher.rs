use std::ffi::OsStr;
use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::decompose::{Decomposition, decompose};
use crate::token::{Token, is_component_globstar, tokenize};
use crate::{GlobOptions, Limits, Pattern, PatternError};

/// Compiled, reusable predicate for one pattern.
///
/// The pattern is translated once into an anchored regular expression:
/// literals are escaped, `?` becomes one non-separator character, `*` a run
/// of non-separator characters and `**` a run of any characters. A `**` that
/// fills a whole path component may also vanish together with its trailing
/// `/`, so `dir/**/file.txt` matches `dir/file.txt`.
///
/// Matching a `&str` does not allocate, and a `Matcher` can be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use patterns::Matcher;
///
/// let matcher = Matcher::new("logs/**/*.LOG").unwrap();
/// assert!(matcher.is_match("logs/app.log"));
/// assert!(matcher.is_match("logs/2024/01/app.log"));
/// assert!(!matcher.is_match("logs/app.txt"));
/// ```
#[derive(Clone, Debug)]
pub struct Matcher {
    pattern: Pattern,
    regex: Regex,
    case_sensitive: bool,
}

impl Matcher {
    /// Compiles `pattern` with default options (case-insensitive).
    pub fn new(pattern: impl Into<Pattern>) -> Result<Self, PatternError> {
        Self::with_options(pattern, &GlobOptions::default())
    }

    /// Compiles `pattern` with explicit options.
    ///
    /// # Errors
    ///
    /// Fails with [`PatternError::TooManyTokens`] when the pattern exceeds the
    /// configured token ceiling, or [`PatternError::Compile`] when the regex
    /// backend rejects the translated expression (for example because it
    /// exceeds the backend's size limit).
    pub fn with_options(
        pattern: impl Into<Pattern>,
        options: &GlobOptions,
    ) -> Result<Self, PatternError> {
        let pattern = pattern.into();
        let tokens = tokenize(pattern.as_str());
        options
            .limits()
            .check_tokens(pattern.as_str(), tokens.len())?;

        let expression = translate(&tokens);
        let regex = RegexBuilder::new(&expression)
            .case_insensitive(!options.case_sensitive())
            .build()
            .map_err(|source| PatternError::Compile {
                pattern: pattern.as_str().to_owned(),
                source,
            })?;

        crate::debug_pattern::trace_pattern_compiled(pattern.as_str(), &expression);

        Ok(Self {
            pattern,
            regex,
            case_sensitive: options.case_sensitive(),
        })
    }

    /// Returns `true` when `path` matches the whole pattern.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Like [`is_match`](Self::is_match) for a [`Path`]. Paths that are not
    /// valid UTF-8 never match.
    #[must_use]
    pub fn is_match_path(&self, path: &Path) -> bool {
        path.to_str().is_some_and(|text| self.is_match(text))
    }

    /// The source pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Prefix/suffix split of the source pattern.
    #[must_use]
    pub fn decomposition(&self) -> Decomposition<'_> {
        decompose(self.pattern.as_str())
    }

    /// Whether literals were compiled case-sensitively.
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// The translated regular expression, for diagnostics.
    #[must_use]
    pub fn expression(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compiles `pattern` with default options.
///
/// # Errors
///
/// See [`Matcher::with_options`].
pub fn compile(pattern: &str) -> Result<Matcher, PatternError> {
    Matcher::new(pattern)
}

/// Compiles `pattern` with explicit options.
///
/// # Errors
///
/// See [`Matcher::with_options`].
pub fn compile_with(pattern: &str, options: &GlobOptions) -> Result<Matcher, PatternError> {
    Matcher::with_options(pattern, options)
}

/// Compiles a pattern received as an OS string.
///
/// # Errors
///
/// Fails with [`PatternError::InvalidArgument`] when `pattern` is not valid
/// UTF-8, otherwise as [`Matcher::with_options`].
pub fn compile_os(pattern: &OsStr, options: &GlobOptions) -> Result<Matcher, PatternError> {
    let text = pattern.to_str().ok_or_else(|| {
        PatternError::invalid_argument(pattern.to_string_lossy(), "pattern is not valid UTF-8")
    })?;
    Matcher::with_options(text, options)
}

/// One-shot match of `path` against `pattern` with default matching rules.
///
/// No complexity ceiling is applied. Prefer compiling a [`Matcher`] once
/// when the same pattern is tested repeatedly.
///
/// ```
/// assert!(patterns::is_match("*.txt", "file.txt"));
/// assert!(!patterns::is_match("*.txt", "dir/file.txt"));
/// assert!(patterns::is_match("**.txt", "dir/file.txt"));
/// ```
#[must_use]
pub fn is_match(pattern: &str, path: &str) -> bool {
    let options = GlobOptions::default().with_limits(Limits::unbounded());
    Matcher::with_options(pattern, &options).is_ok_and(|matcher| matcher.is_match(path))
}

fn translate(tokens: &[Token]) -> String {
    let mut expression = String::with_capacity(tokens.len() * 2 + 8);
    expression.push_str(r"\A");

    let mut index = 0;
    while index < tokens.len() {
        match tokens[index] {
            Token::StarStar if is_component_globstar(tokens, index) => {
                expression.push_str("(?s:.*/)?");
                index += 2;
                continue;
            }
            Token::StarStar => expression.push_str("(?s:.*)"),
            Token::Star => expression.push_str("[^/]*"),
            Token::QuestionMark => expression.push_str("[^/]"),
            Token::Slash => expression.push('/'),
            Token::Char(c) => {
                let mut buffer = [0u8; 4];
                expression.push_str(&regex::escape(c.encode_utf8(&mut buffer)));
            }
        }
        index += 1;
    }

    expression.push_str(r"\z");
    expression
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(pattern: &str) -> Matcher {
        Matcher::new(pattern).expect("pattern compiles")
    }

    #[test]
    fn translation_anchors_and_escapes() {
        assert_eq!(translate(&tokenize("a.b")), r"\Aa\.b\z");
        assert_eq!(translate(&tokenize("?*")), r"\A[^/][^/]*\z");
        assert_eq!(translate(&tokenize("a**")), r"\Aa(?s:.*)\z");
        assert_eq!(translate(&tokenize("a/**/b")), r"\Aa/(?s:.*/)?b\z");
    }

    #[test]
    fn regex_metacharacters_are_literals() {
        let m = matcher("a+(b)[c]{1}$");
        assert!(m.is_match("a+(b)[c]{1}$"));
        assert!(!m.is_match("aa(b)c1"));
    }

    #[test]
    fn question_mark_matches_one_non_separator() {
        let m = matcher("file?.txt");
        assert!(m.is_match("file1.txt"));
        assert!(!m.is_match("file.txt"));
        assert!(!m.is_match("file12.txt"));
        assert!(!matcher("a?b").is_match("a/b"));
    }

    #[test]
    fn star_stays_within_segment() {
        let m = matcher("*.txt");
        assert!(m.is_match("file.txt"));
        assert!(m.is_match(".txt"));
        assert!(!m.is_match("dir/file.txt"));
    }

    #[test]
    fn globstar_crosses_separators() {
        let m = matcher("**.txt");
        assert!(m.is_match("dir/file.txt"));
        assert!(m.is_match("a/b/c.txt"));
        assert!(m.is_match("x.txt"));
    }

    #[test]
    fn component_globstar_matches_zero_levels() {
        let m = matcher("dir/**/file.txt");
        assert!(m.is_match("dir/file.txt"));
        assert!(m.is_match("dir/a/file.txt"));
        assert!(m.is_match("dir/a/b/file.txt"));
        assert!(!m.is_match("dirfile.txt"));

        let leading = matcher("**/file.txt");
        assert!(leading.is_match("file.txt"));
        assert!(leading.is_match("deep/er/file.txt"));
    }

    #[test]
    fn matching_is_case_insensitive_by_default() {
        assert!(matcher("README.*").is_match("readme.md"));

        let sensitive = GlobOptions::new().with_case_sensitive(true);
        let m = Matcher::with_options("README.*", &sensitive).unwrap();
        assert!(m.is_case_sensitive());
        assert!(!m.is_match("readme.md"));
        assert!(m.is_match("README.md"));
    }

    #[test]
    fn match_is_anchored_at_both_ends() {
        let m = matcher("b");
        assert!(!m.is_match("abc"));
        assert!(!m.is_match("b\n"));
        assert!(m.is_match("b"));
    }

    #[test]
    fn globstar_matches_newlines() {
        assert!(matcher("a**b").is_match("a\n/\nb"));
    }

    #[test]
    fn path_matching_uses_utf8_text() {
        let m = matcher("src/*.rs");
        assert!(m.is_match_path(Path::new("src/lib.rs")));
        assert!(!m.is_match_path(Path::new("src/lib.c")));
    }

    #[test]
    fn token_ceiling_applies_to_compilation() {
        let options = GlobOptions::new().with_limits(Limits::default().with_max_tokens(3));
        let error = Matcher::with_options("abcd", &options).unwrap_err();
        assert!(error.is_too_complex());
        assert!(Matcher::with_options("abc", &options).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn os_string_patterns_must_be_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let invalid = OsStr::from_bytes(b"a\xffb");
        let error = compile_os(invalid, &GlobOptions::default()).unwrap_err();
        assert!(matches!(error, PatternError::InvalidArgument { .. }));

        let valid = compile_os(OsStr::new("*.rs"), &GlobOptions::default()).unwrap();
        assert!(valid.is_match("main.rs"));
    }

    #[test]
    fn matcher_reports_its_pattern() {
        let m = compile("a/*/c").unwrap();
        assert_eq!(m.pattern(), "a/*/c");
        assert_eq!(m.decomposition().prefix(), "a/");
        assert!(m.expression().starts_with(r"\A"));
    }
}
