//! Set operations computed directly over pattern token streams.
//!
//! Both operations run a product search over a cursor pair `(i, j)` into the
//! two token arrays, accumulating a result token sequence as they go. Every
//! transition advances at least one cursor, so the search always halts; the
//! visited-state ceiling in [`Limits`](crate::Limits) bounds the worst case.
//!
//! - [`intersect`] enumerates every accepting path with a worklist and a
//!   visited set. Each accepting path yields a pattern whose language lies
//!   inside both inputs; several are folded together with [`union`].
//! - [`union`] aligns the two streams, widening divergent columns to `?`, `*`
//!   or `**`, and keeps the highest-scoring alignment per state. The result
//!   is a single pattern whose language covers both inputs.

mod intersect;
mod union;

pub use intersect::{intersect, intersect_with};
pub use union::{union, union_with};

use crate::token::{Token, tokenize};
use crate::{Limits, PatternError};

/// How adjacent open-ended wildcards are folded when appended to a result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Fold {
    /// Keep the narrower wildcard. The result may only shrink.
    Narrow,
    /// Keep the wider wildcard. The result may only grow.
    Widen,
}

/// What appending a token to a result ending in `last` does.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Step {
    Push,
    Skip,
    /// Replace the trailing `*` with `**`.
    Widen,
}

/// Decides how `token` joins a result ending in `last`, never leaving two
/// open-ended wildcards side by side.
///
/// Adjacent wildcards would otherwise render as `***`-style text that lexes
/// back into different tokens.
fn fold_step(last: Option<Token>, token: Token, fold: Fold) -> Step {
    match (last, token) {
        (Some(Token::Star), Token::Star)
        | (Some(Token::StarStar), Token::Star | Token::StarStar) => Step::Skip,
        (Some(Token::Star), Token::StarStar) => match fold {
            Fold::Narrow => Step::Skip,
            Fold::Widen => Step::Widen,
        },
        _ => Step::Push,
    }
}

fn push_folded(result: &mut Vec<Token>, token: Token, fold: Fold) {
    match fold_step(result.last().copied(), token, fold) {
        Step::Push => result.push(token),
        Step::Skip => {}
        Step::Widen => {
            if let Some(last) = result.last_mut() {
                *last = Token::StarStar;
            }
        }
    }
}

fn prepare(pattern: &str, limits: &Limits) -> Result<Vec<Token>, PatternError> {
    let tokens = tokenize(pattern);
    limits.check_tokens(pattern, tokens.len())?;
    Ok(tokens)
}
