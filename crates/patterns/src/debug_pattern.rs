//! Structured tracing for pattern compilation, decomposition and set algebra.
//!
//! Every event is emitted under the `vfsglob::pattern` target. The functions
//! are compiled only with the `tracing` feature; without it they collapse to
//! inline no-ops so call sites need no `cfg` guards of their own.
//!
//! # Examples
//!
//! ```
//! use patterns::debug_pattern::PatternTracer;
//!
//! let mut tracer = PatternTracer::new();
//! tracer.record_compiled();
//! tracer.record_match(true);
//! tracer.record_match(false);
//! tracer.summary();
//!
//! assert_eq!(tracer.paths_evaluated(), 2);
//! assert_eq!(tracer.paths_matched(), 1);
//! ```

use crate::SuffixDepth;

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const PATTERN_TARGET: &str = "vfsglob::pattern";

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a pattern translated into its regular expression.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pattern_compiled(pattern: &str, expression: &str) {
    tracing::debug!(
        target: PATTERN_TARGET,
        pattern = %pattern,
        expression = %expression,
        "pattern_compiled"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pattern_compiled(_pattern: &str, _expression: &str) {}

/// Traces the prefix/suffix split of a pattern.
///
/// # Arguments
///
/// * `pattern` - The decomposed pattern
/// * `prefix` - Its literal directory prefix
/// * `depth` - Directory levels spanned by the suffix
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pattern_decomposed(pattern: &str, prefix: &str, depth: SuffixDepth) {
    tracing::trace!(
        target: PATTERN_TARGET,
        pattern = %pattern,
        prefix = %prefix,
        suffix_depth = %depth,
        "pattern_decomposed"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pattern_decomposed(_pattern: &str, _prefix: &str, _depth: SuffixDepth) {}

/// Traces a complexity ceiling being hit.
///
/// `kind` is `"tokens"` or `"states"`.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_limit_exceeded(kind: &str, limit: usize) {
    tracing::warn!(
        target: PATTERN_TARGET,
        kind = %kind,
        limit = limit,
        "limit_exceeded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_limit_exceeded(_kind: &str, _limit: usize) {}

/// Traces the outcome of an intersection.
///
/// # Arguments
///
/// * `left`, `right` - The input patterns
/// * `candidates` - Distinct accepted result sequences
/// * `visited` - States visited by the product search
/// * `result` - The returned overlap, if any
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_intersection(
    left: &str,
    right: &str,
    candidates: usize,
    visited: usize,
    result: Option<&str>,
) {
    tracing::debug!(
        target: PATTERN_TARGET,
        left = %left,
        right = %right,
        candidates = candidates,
        visited = visited,
        result = ?result,
        "pattern_intersection"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_intersection(
    _left: &str,
    _right: &str,
    _candidates: usize,
    _visited: usize,
    _result: Option<&str>,
) {
}

/// Traces the outcome of a union.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_union(left: &str, right: &str, result: &str) {
    tracing::debug!(
        target: PATTERN_TARGET,
        left = %left,
        right = %right,
        result = %result,
        "pattern_union"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_union(_left: &str, _right: &str, _result: &str) {}

/// Traces aggregate match statistics.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_match_summary(patterns_compiled: usize, paths_evaluated: usize, paths_matched: usize) {
    tracing::info!(
        target: PATTERN_TARGET,
        patterns_compiled = patterns_compiled,
        paths_evaluated = paths_evaluated,
        paths_matched = paths_matched,
        "match_summary"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_match_summary(
    _patterns_compiled: usize,
    _paths_evaluated: usize,
    _paths_matched: usize,
) {
}

// ============================================================================
// PatternTracer - counters for a matching session
// ============================================================================

/// Aggregates match statistics across a session.
///
/// Call [`summary`](Self::summary) once at the end to emit a single
/// `match_summary` event instead of one event per path.
#[derive(Debug, Clone, Default)]
pub struct PatternTracer {
    patterns_compiled: usize,
    paths_evaluated: usize,
    paths_matched: usize,
}

impl PatternTracer {
    /// Creates a tracer with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns_compiled: 0,
            paths_evaluated: 0,
            paths_matched: 0,
        }
    }

    /// Records one compiled pattern.
    pub const fn record_compiled(&mut self) {
        self.patterns_compiled += 1;
    }

    /// Records one path tested against a pattern.
    pub const fn record_match(&mut self, matched: bool) {
        self.paths_evaluated += 1;
        if matched {
            self.paths_matched += 1;
        }
    }

    /// Emits the accumulated counters.
    pub fn summary(&self) {
        trace_match_summary(
            self.patterns_compiled,
            self.paths_evaluated,
            self.paths_matched,
        );
    }

    /// Resets all counters to zero.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of compiled patterns.
    #[must_use]
    pub const fn patterns_compiled(&self) -> usize {
        self.patterns_compiled
    }

    /// Number of paths tested.
    #[must_use]
    pub const fn paths_evaluated(&self) -> usize {
        self.paths_evaluated
    }

    /// Number of paths that matched.
    #[must_use]
    pub const fn paths_matched(&self) -> usize {
        self.paths_matched
    }

    /// Number of paths that did not match.
    #[must_use]
    pub const fn paths_unmatched(&self) -> usize {
        self.paths_evaluated - self.paths_matched
    }
}
