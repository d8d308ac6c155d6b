use rustc_hash::{FxHashMap, FxHashSet};

use super::union::union_tokens;
use super::{Fold, Step, fold_step, prepare};
use crate::token::{Token, is_component_globstar};
use crate::{GlobOptions, Pattern, PatternError};

/// Computes the overlap of two patterns with default options.
///
/// Returns `Ok(None)` when no path can match both patterns.
///
/// # Errors
///
/// Fails when either pattern or the search exceeds the default
/// [`Limits`](crate::Limits).
///
/// # Examples
///
/// ```
/// use patterns::intersect;
///
/// assert_eq!(intersect("dir/*.txt", "dir/*.log").unwrap(), None);
///
/// let overlap = intersect("src/**", "src/*.rs").unwrap().unwrap();
/// assert_eq!(overlap, "src/*.rs");
/// ```
pub fn intersect(left: &str, right: &str) -> Result<Option<Pattern>, PatternError> {
    intersect_with(left, right, &GlobOptions::default())
}

/// Computes the overlap of two patterns.
///
/// Every accepting path of the product search yields a pattern whose
/// language lies inside both inputs. When one of those candidates is
/// token-for-token equal to an input, that input is entirely contained in the
/// other and is returned unchanged. Otherwise the candidates are folded into
/// one representative pattern with [`union`](super::union), which may cover
/// slightly more than the exact overlap.
///
/// # Errors
///
/// Fails with [`PatternError::TooManyTokens`] before searching when an input
/// exceeds the token ceiling, and with [`PatternError::TooManyStates`] when
/// the search visits more states than allowed.
pub fn intersect_with(
    left: &str,
    right: &str,
    options: &GlobOptions,
) -> Result<Option<Pattern>, PatternError> {
    let left_tokens = prepare(left, options.limits())?;
    let right_tokens = prepare(right, options.limits())?;

    if left_tokens == right_tokens {
        crate::debug_pattern::trace_intersection(left, right, 1, 0, Some(left));
        return Ok(Some(Pattern::new(left)));
    }

    let search = ProductSearch::new(&left_tokens, &right_tokens, options);
    let (candidates, visited) = search.run()?;

    let overlap = if candidates.is_empty() {
        None
    } else if candidates.iter().any(|tokens| *tokens == left_tokens) {
        Some(Pattern::new(left))
    } else if candidates.iter().any(|tokens| *tokens == right_tokens) {
        Some(Pattern::new(right))
    } else {
        let mut remaining = candidates.iter();
        let mut merged = remaining.next().cloned().unwrap_or_default();
        for tokens in remaining {
            merged = union_tokens(&merged, tokens, options)?;
        }
        Some(Pattern::from_tokens(&merged))
    };

    crate::debug_pattern::trace_intersection(
        left,
        right,
        candidates.len(),
        visited,
        overlap.as_ref().map(Pattern::as_str),
    );

    Ok(overlap)
}

/// Hash-consed result sequences. Every sequence is a node whose parent is
/// the sequence without its last token, so a search state stays a handful of
/// integers.
struct ResultTrie {
    nodes: Vec<(u32, Token)>,
    children: FxHashMap<(u32, Token), u32>,
}

impl ResultTrie {
    const ROOT: u32 = 0;

    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            children: FxHashMap::default(),
        }
    }

    fn last(&self, id: u32) -> Option<Token> {
        id.checked_sub(1).map(|index| self.nodes[index as usize].1)
    }

    /// Id of `parent` extended by `token` under narrowing fold rules.
    fn extend(&mut self, parent: u32, token: Token) -> u32 {
        if fold_step(self.last(parent), token, Fold::Narrow) != Step::Push {
            return parent;
        }
        let next = u32::try_from(self.nodes.len() + 1).unwrap_or(u32::MAX);
        let nodes = &mut self.nodes;
        *self.children.entry((parent, token)).or_insert_with(|| {
            nodes.push((parent, token));
            next
        })
    }

    fn tokens(&self, mut id: u32) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(index) = id.checked_sub(1) {
            let (parent, token) = self.nodes[index as usize];
            tokens.push(token);
            id = parent;
        }
        tokens.reverse();
        tokens
    }
}

/// Sides whose current wildcard has already swallowed opposing tokens. A
/// whole-segment `**/` may only vanish before it has consumed anything.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
struct Held {
    left: bool,
    right: bool,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
struct State {
    left: u32,
    right: u32,
    result: u32,
    held: Held,
}

/// Worklist-driven product search over two token streams.
struct ProductSearch<'a> {
    left: &'a [Token],
    right: &'a [Token],
    options: &'a GlobOptions,
    results: ResultTrie,
    visited: FxHashSet<State>,
    worklist: Vec<State>,
    accepted: Vec<u32>,
}

impl<'a> ProductSearch<'a> {
    fn new(left: &'a [Token], right: &'a [Token], options: &'a GlobOptions) -> Self {
        Self {
            left,
            right,
            options,
            results: ResultTrie::new(),
            visited: FxHashSet::default(),
            worklist: Vec::new(),
            accepted: Vec::new(),
        }
    }

    /// Runs the search to exhaustion, returning the distinct accepted result
    /// sequences in discovery order and the number of visited states.
    fn run(mut self) -> Result<(Vec<Vec<Token>>, usize), PatternError> {
        self.enqueue(0, 0, ResultTrie::ROOT, Held::default())?;

        while let Some(state) = self.worklist.pop() {
            self.expand(state)?;
        }

        // Final states differing only in held flags accept the same sequence.
        let mut seen = FxHashSet::default();
        self.accepted.retain(|&id| seen.insert(id));
        let accepted = self
            .accepted
            .iter()
            .map(|&id| self.results.tokens(id))
            .collect();
        Ok((accepted, self.visited.len()))
    }

    fn enqueue(
        &mut self,
        left: usize,
        right: usize,
        result: u32,
        held: Held,
    ) -> Result<(), PatternError> {
        // Token counts are bounded by the token ceiling long before u32 runs out.
        let state = State {
            left: u32::try_from(left).unwrap_or(u32::MAX),
            right: u32::try_from(right).unwrap_or(u32::MAX),
            result,
            held,
        };
        if self.visited.contains(&state) {
            return Ok(());
        }
        self.options.limits().check_states(self.visited.len() + 1)?;
        self.visited.insert(state);
        self.worklist.push(state);
        Ok(())
    }

    fn step(
        &mut self,
        (left, right): (usize, usize),
        held: Held,
        result: u32,
        emitted: Option<Token>,
    ) -> Result<(), PatternError> {
        let next = match emitted {
            Some(token) => self.results.extend(result, token),
            None => result,
        };
        self.enqueue(left, right, next, held)
    }

    fn expand(&mut self, state: State) -> Result<(), PatternError> {
        let (i, j, result) = (state.left as usize, state.right as usize, state.result);
        let held = state.held;
        let a = self.left.get(i).copied();
        let b = self.right.get(j).copied();

        if a.is_none() && b.is_none() {
            self.accepted.push(result);
            return Ok(());
        }

        let left_moved = Held {
            left: false,
            right: held.right,
        };
        let right_moved = Held {
            left: held.left,
            right: false,
        };

        if !held.left && is_component_globstar(self.left, i) {
            self.step((i + 2, j), left_moved, result, None)?;
        }
        if !held.right && is_component_globstar(self.right, j) {
            self.step((i, j + 2), right_moved, result, None)?;
        }

        if let Some(wildcard @ (Token::Star | Token::StarStar)) = a {
            self.step((i + 1, j), left_moved, result, None)?;
            if let Some(absorbed) = b.and_then(|other| absorb(wildcard, other)) {
                let held = Held {
                    left: true,
                    right: false,
                };
                self.step((i, j + 1), held, result, Some(absorbed))?;
            }
        }

        if let Some(wildcard @ (Token::Star | Token::StarStar)) = b {
            self.step((i, j + 1), right_moved, result, None)?;
            if let Some(absorbed) = a.and_then(|other| absorb(wildcard, other)) {
                let held = Held {
                    left: false,
                    right: true,
                };
                self.step((i + 1, j), held, result, Some(absorbed))?;
            }
        }

        if let (Some(x), Some(y)) = (a, b) {
            if let Some(met) = meet(x, y, self.options) {
                self.step((i + 1, j + 1), Held::default(), result, Some(met))?;
            }
        }

        Ok(())
    }
}

/// Token appended when `wildcard` swallows one opposing token, or `None`
/// when it cannot (a `*` never crosses a separator).
const fn absorb(wildcard: Token, other: Token) -> Option<Token> {
    match (wildcard, other) {
        (Token::Star, Token::Slash) => None,
        (Token::Star, Token::StarStar) => Some(Token::Star),
        (_, other) => Some(other),
    }
}

/// Token appended when two single-unit tokens consume one character each.
fn meet(x: Token, y: Token, options: &GlobOptions) -> Option<Token> {
    match (x, y) {
        (Token::Slash, Token::Slash) => Some(Token::Slash),
        (Token::QuestionMark, Token::QuestionMark) => Some(Token::QuestionMark),
        (Token::QuestionMark, Token::Char(c)) | (Token::Char(c), Token::QuestionMark) => {
            Some(Token::Char(c))
        }
        (Token::Char(p), Token::Char(q)) if options.chars_equal(p, q) => Some(Token::Char(p)),
        _ => None,
    }
}
