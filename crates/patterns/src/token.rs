use std::fmt;
use std::iter::FusedIterator;

/// One lexical unit of a glob pattern.
///
/// Only [`Token::Char`] carries a payload. Literal characters are never
/// grouped into runs so the set-algebra search can align patterns one
/// character at a time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    /// Path separator `/`.
    Slash,
    /// `?`: exactly one character other than `/`.
    QuestionMark,
    /// `*`: any run of characters other than `/`.
    Star,
    /// `**`: any run of characters, separators included.
    StarStar,
    /// A literal character.
    Char(char),
}

impl Token {
    /// Returns `true` for `?`, `*` and `**`.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::QuestionMark | Self::Star | Self::StarStar)
    }

    /// Returns `true` for tokens that match exactly one fixed character.
    #[must_use]
    pub const fn is_concrete(self) -> bool {
        matches!(self, Self::Slash | Self::Char(_))
    }

    /// Returns `true` for `*` and `**`, which may match an empty span.
    #[must_use]
    pub const fn is_open_ended(self) -> bool {
        matches!(self, Self::Star | Self::StarStar)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slash => f.write_str("/"),
            Self::QuestionMark => f.write_str("?"),
            Self::Star => f.write_str("*"),
            Self::StarStar => f.write_str("**"),
            Self::Char(c) => fmt::Write::write_char(f, *c),
        }
    }
}

/// Forward-only lexer over a pattern string.
///
/// Each call to [`next`](Iterator::next) produces one token together with the
/// byte offset at which it starts. A single character of lookahead decides
/// between `*` and `**`; lexing is greedy, so `***` yields `**` followed by
/// `*`.
///
/// # Examples
///
/// ```
/// use patterns::{Token, Tokenizer};
///
/// let tokens: Vec<_> = Tokenizer::new("a/**?").collect();
/// assert_eq!(
///     tokens,
///     [
///         (0, Token::Char('a')),
///         (1, Token::Slash),
///         (2, Token::StarStar),
///         (4, Token::QuestionMark),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    pattern: &'a str,
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned at the start of `pattern`.
    #[must_use]
    pub const fn new(pattern: &'a str) -> Self {
        Self { pattern, cursor: 0 }
    }

    /// Byte offset of the next token.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Portion of the pattern that has not been lexed yet.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        &self.pattern[self.cursor..]
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = (usize, Token);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor;
        let rest = &self.pattern[start..];
        let ch = rest.chars().next()?;
        let (token, width) = match ch {
            '/' => (Token::Slash, 1),
            '?' => (Token::QuestionMark, 1),
            '*' if rest.as_bytes().get(1) == Some(&b'*') => (Token::StarStar, 2),
            '*' => (Token::Star, 1),
            other => (Token::Char(other), other.len_utf8()),
        };
        self.cursor += width;
        Some((start, token))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pattern.len() - self.cursor;
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Lexes `pattern` into a token vector.
#[must_use]
pub fn tokenize(pattern: &str) -> Vec<Token> {
    Tokenizer::new(pattern).map(|(_, token)| token).collect()
}

/// Returns `true` when `text` contains `?` or `*`.
///
/// ```
/// assert!(patterns::is_glob_pattern("*.txt"));
/// assert!(patterns::is_glob_pattern("file?.log"));
/// assert!(!patterns::is_glob_pattern("dir/file.txt"));
/// ```
#[must_use]
pub fn is_glob_pattern(text: &str) -> bool {
    text.contains(['?', '*'])
}

/// Returns `true` when the `**` at `index` spans a whole path component,
/// i.e. it starts the pattern or follows `/`, and is followed by `/`.
///
/// Such a `**` may also match nothing at all together with its trailing
/// separator, so `a/**/b` accepts `a/b`.
pub(crate) fn is_component_globstar(tokens: &[Token], index: usize) -> bool {
    tokens.get(index) == Some(&Token::StarStar)
        && tokens.get(index + 1) == Some(&Token::Slash)
        && (index == 0 || tokens[index - 1] == Token::Slash)
}

/// Renders a token sequence back into pattern text.
pub(crate) fn render(tokens: &[Token]) -> String {
    let mut text = String::with_capacity(tokens.len() + 4);
    for token in tokens {
        match token {
            Token::Slash => text.push('/'),
            Token::QuestionMark => text.push('?'),
            Token::Star => text.push('*'),
            Token::StarStar => text.push_str("**"),
            Token::Char(c) => text.push(*c),
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_stars_lex_as_one_globstar() {
        assert_eq!(tokenize("**"), [Token::StarStar]);
        assert_eq!(tokenize("***"), [Token::StarStar, Token::Star]);
        assert_eq!(tokenize("****"), [Token::StarStar, Token::StarStar]);
    }

    #[test]
    fn literals_are_not_grouped() {
        assert_eq!(
            tokenize("ab/"),
            [Token::Char('a'), Token::Char('b'), Token::Slash]
        );
    }

    #[test]
    fn offsets_follow_utf8_widths() {
        let offsets: Vec<usize> = Tokenizer::new("é*ü").map(|(offset, _)| offset).collect();
        assert_eq!(offsets, [0, 2, 3]);
    }

    #[test]
    fn remainder_tracks_cursor() {
        let mut tokenizer = Tokenizer::new("**/x");
        assert_eq!(tokenizer.next(), Some((0, Token::StarStar)));
        assert_eq!(tokenizer.cursor(), 2);
        assert_eq!(tokenizer.remainder(), "/x");
    }

    #[test]
    fn empty_pattern_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(!is_glob_pattern(""));
    }

    #[test]
    fn render_inverts_tokenize() {
        for pattern in ["", "a/b", "**/x?.txt", "*", "dir/**", "?/?"] {
            assert_eq!(render(&tokenize(pattern)), pattern);
        }
    }

    #[test]
    fn component_globstar_requires_separator_context() {
        assert!(is_component_globstar(&tokenize("**/a"), 0));
        assert!(is_component_globstar(&tokenize("a/**/b"), 2));
        assert!(!is_component_globstar(&tokenize("a**/b"), 1));
        assert!(!is_component_globstar(&tokenize("a/**"), 2));
        assert!(!is_component_globstar(&tokenize("a/*/b"), 2));
    }

    #[test]
    fn token_classes() {
        assert!(Token::Star.is_wildcard());
        assert!(Token::Star.is_open_ended());
        assert!(!Token::QuestionMark.is_open_ended());
        assert!(Token::Slash.is_concrete());
        assert!(Token::Char('x').is_concrete());
        assert!(!Token::StarStar.is_concrete());
        assert_eq!(Token::StarStar.to_string(), "**");
    }
}
