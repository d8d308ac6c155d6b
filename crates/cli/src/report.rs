use serde::Serialize;

use patterns::{Decomposition, SuffixDepth};

/// JSON shape printed by `decompose --json`.
#[derive(Debug, Serialize)]
pub(crate) struct DecompositionReport<'a> {
    pattern: &'a str,
    prefix: &'a str,
    suffix: &'a str,
    suffix_depth: SuffixDepth,
    literal: bool,
}

impl<'a> From<Decomposition<'a>> for DecompositionReport<'a> {
    fn from(parts: Decomposition<'a>) -> Self {
        Self {
            pattern: parts.pattern(),
            prefix: parts.prefix(),
            suffix: parts.suffix(),
            suffix_depth: parts.suffix_depth(),
            literal: parts.is_literal(),
        }
    }
}
