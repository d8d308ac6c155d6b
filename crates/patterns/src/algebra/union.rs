use super::{Fold, prepare, push_folded};
use crate::token::{Token, is_component_globstar};
use crate::{GlobOptions, Matcher, Pattern, PatternError};

/// Computes a single pattern covering both inputs, with default options.
///
/// # Errors
///
/// Fails when either pattern or the alignment table exceeds the default
/// [`Limits`](crate::Limits).
///
/// # Examples
///
/// ```
/// use patterns::{is_match, union};
///
/// let both = union("logs/app.log", "logs/web.log").unwrap();
/// assert!(is_match(both.as_str(), "logs/app.log"));
/// assert!(is_match(both.as_str(), "logs/web.log"));
///
/// assert_eq!(union("src/*.rs", "src/*.rs").unwrap(), "src/*.rs");
/// ```
pub fn union(left: &str, right: &str) -> Result<Pattern, PatternError> {
    union_with(left, right, &GlobOptions::default())
}

/// Computes a single pattern covering both inputs.
///
/// The two token streams are aligned column by column. Equal columns are kept,
/// differing columns widen to the narrowest wildcard covering both, and a
/// token present on only one side becomes `*` (or `**` when it is, or may
/// hide, a separator). Among all alignments the one with the highest
/// specificity score wins: literals and separators weigh 8, `?` 4, `*` 2 and
/// `**` 1. Ties keep the alignment found first.
///
/// When one input is a literal path already matched by the other pattern, the
/// other pattern is returned unchanged.
///
/// # Errors
///
/// Fails with [`PatternError::TooManyTokens`] before aligning when an input
/// exceeds the token ceiling, and with [`PatternError::TooManyStates`] when
/// the alignment table would exceed the state ceiling.
pub fn union_with(left: &str, right: &str, options: &GlobOptions) -> Result<Pattern, PatternError> {
    let left_tokens = prepare(left, options.limits())?;
    let right_tokens = prepare(right, options.limits())?;

    let covered = if left_tokens == right_tokens {
        Some(Pattern::new(left))
    } else if covers(left, right, options)? {
        Some(Pattern::new(left))
    } else if covers(right, left, options)? {
        Some(Pattern::new(right))
    } else {
        None
    };

    let pattern = match covered {
        Some(pattern) => pattern,
        None => Pattern::from_tokens(&union_tokens(&left_tokens, &right_tokens, options)?),
    };

    crate::debug_pattern::trace_union(left, right, pattern.as_str());
    Ok(pattern)
}

/// Returns `true` when `path` is a literal matched by `pattern`.
fn covers(pattern: &str, path: &str, options: &GlobOptions) -> Result<bool, PatternError> {
    if crate::is_glob_pattern(path) {
        return Ok(false);
    }
    Ok(Matcher::with_options(pattern, options)?.is_match(path))
}

/// Aligns two token streams and returns the best covering sequence.
pub(super) fn union_tokens(
    left: &[Token],
    right: &[Token],
    options: &GlobOptions,
) -> Result<Vec<Token>, PatternError> {
    let table = AlignmentTable::new(left, right, options)?;
    Ok(table.solve())
}

/// Kind of the last emitted token. Together with the cursor pair it decides
/// both how the next token folds and whether a `**/` may be taken apart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Tail {
    Start,
    Slash,
    Unit,
    Star,
    StarStar,
}

impl Tail {
    const ALL: [Self; 5] = [
        Self::Start,
        Self::Slash,
        Self::Unit,
        Self::Star,
        Self::StarStar,
    ];

    const fn of(tokens: &[Token]) -> Self {
        match tokens.last() {
            None => Self::Start,
            Some(Token::Slash) => Self::Slash,
            Some(Token::Star) => Self::Star,
            Some(Token::StarStar) => Self::StarStar,
            Some(Token::QuestionMark | Token::Char(_)) => Self::Unit,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// A component globstar can only be split into `**` and `/` columns when
    /// the emitted `**` is guaranteed to start a component of its own.
    const fn at_component_start(self) -> bool {
        matches!(self, Self::Start | Self::Slash)
    }
}

#[derive(Clone, Debug)]
struct Alignment {
    score: u32,
    tokens: Vec<Token>,
}

impl Alignment {
    fn extended(&self, emitted: &[Token]) -> Self {
        let mut tokens = self.tokens.clone();
        let mut score = self.score;
        for &token in emitted {
            let before = tokens.last().copied();
            let len = tokens.len();
            push_folded(&mut tokens, token, Fold::Widen);
            if tokens.len() > len {
                score += weight(token);
            } else if let (Some(previous), Some(&now)) = (before, tokens.last()) {
                if previous != now {
                    score = score - weight(previous) + weight(now);
                }
            }
        }
        Self { score, tokens }
    }
}

const fn weight(token: Token) -> u32 {
    match token {
        Token::Slash | Token::Char(_) => 8,
        Token::QuestionMark => 4,
        Token::Star => 2,
        Token::StarStar => 1,
    }
}

/// Narrowest single token covering both column entries.
fn join(x: Token, y: Token, options: &GlobOptions) -> Token {
    match (x, y) {
        (Token::StarStar, _) | (_, Token::StarStar) => Token::StarStar,
        (Token::Slash, Token::Slash) => Token::Slash,
        (Token::Slash, _) | (_, Token::Slash) => Token::StarStar,
        (Token::Star, _) | (_, Token::Star) => Token::Star,
        (Token::Char(p), Token::Char(q)) if options.chars_equal(p, q) => Token::Char(p),
        _ => Token::QuestionMark,
    }
}

/// Token covering `x` when the other side contributes nothing.
const fn gap(x: Token) -> Token {
    match x {
        Token::Slash | Token::StarStar => Token::StarStar,
        Token::QuestionMark | Token::Star | Token::Char(_) => Token::Star,
    }
}

/// Best alignment per `(i, j, tail)`, filled in row-major order. Every
/// transition advances at least one cursor, so a cell is final once the
/// sweep reaches it.
struct AlignmentTable<'a> {
    left: &'a [Token],
    right: &'a [Token],
    options: &'a GlobOptions,
    cells: Vec<Option<Alignment>>,
}

impl<'a> AlignmentTable<'a> {
    fn new(
        left: &'a [Token],
        right: &'a [Token],
        options: &'a GlobOptions,
    ) -> Result<Self, PatternError> {
        let size = (left.len() + 1) * (right.len() + 1) * Tail::ALL.len();
        options.limits().check_states(size)?;

        let mut cells = vec![None; size];
        cells[0] = Some(Alignment {
            score: 0,
            tokens: Vec::new(),
        });

        Ok(Self {
            left,
            right,
            options,
            cells,
        })
    }

    const fn index(&self, i: usize, j: usize, tail: Tail) -> usize {
        (i * (self.right.len() + 1) + j) * Tail::ALL.len() + tail.index()
    }

    fn offer(&mut self, i: usize, j: usize, from: &Alignment, emitted: &[Token]) {
        let candidate = from.extended(emitted);
        let index = self.index(i, j, Tail::of(&candidate.tokens));
        let slot = &mut self.cells[index];
        if slot
            .as_ref()
            .is_none_or(|existing| candidate.score > existing.score)
        {
            *slot = Some(candidate);
        }
    }

    fn solve(mut self) -> Vec<Token> {
        let (m, n) = (self.left.len(), self.right.len());

        for i in 0..=m {
            for j in 0..=n {
                if i == m && j == n {
                    break;
                }
                for tail in Tail::ALL {
                    let index = self.index(i, j, tail);
                    if let Some(current) = self.cells[index].take() {
                        self.relax(i, j, tail, &current);
                    }
                }
            }
        }

        let mut best: Option<Alignment> = None;
        for tail in Tail::ALL {
            let index = self.index(m, n, tail);
            if let Some(candidate) = self.cells[index].take() {
                if best
                    .as_ref()
                    .is_none_or(|current| candidate.score > current.score)
                {
                    best = Some(candidate);
                }
            }
        }
        best.map(|alignment| alignment.tokens).unwrap_or_default()
    }

    fn relax(&mut self, i: usize, j: usize, tail: Tail, current: &Alignment) {
        let a = self.left.get(i).copied();
        let b = self.right.get(j).copied();
        let a_unit = is_component_globstar(self.left, i);
        let b_unit = is_component_globstar(self.right, j);
        let boundary = tail.at_component_start();

        // A component globstar consumed token by token must stay a component
        // globstar in the result, which only holds right after a boundary.
        let a_split = !a_unit || boundary;
        let b_split = !b_unit || boundary;

        if let (Some(x), Some(y)) = (a, b) {
            if a_split && b_split {
                let joined = join(x, y, self.options);
                self.offer(i + 1, j + 1, current, &[joined]);
            }
            if a_unit && b_unit {
                self.offer(i + 2, j + 2, current, &[Token::StarStar]);
                if boundary {
                    self.offer(i + 2, j + 2, current, &[Token::StarStar, Token::Slash]);
                }
            }
            if a_unit && b_split {
                self.offer(i + 2, j + 1, current, &[Token::StarStar]);
            }
            if b_unit && a_split {
                self.offer(i + 1, j + 2, current, &[Token::StarStar]);
            }
        }

        if let Some(x) = a {
            if a_split {
                self.offer(i + 1, j, current, &[gap(x)]);
            }
            if a_unit {
                self.offer(i + 2, j, current, &[Token::StarStar]);
            }
        }

        if let Some(y) = b {
            if b_split {
                self.offer(i, j + 1, current, &[gap(y)]);
            }
            if b_unit {
                self.offer(i, j + 2, current, &[Token::StarStar]);
            }
        }
    }
}
