//! Integration tests for compiled matchers.
//!
//! Covers wildcard semantics at separator boundaries, the zero-width reading
//! of a whole-component `**`, case handling and the shared matcher cache.

use patterns::{GlobOptions, Limits, Matcher, MatcherCache, PatternError, compile, is_match};
use std::path::Path;

// ============================================================================
// Wildcard Semantics
// ============================================================================

/// Verifies `*` stays inside one path segment.
#[test]
fn star_matches_within_one_segment() {
    assert!(is_match("*.txt", "file.txt"));
    assert!(!is_match("*.txt", "dir/file.txt"));
    assert!(is_match("*/*.txt", "dir/file.txt"));
}

/// Verifies `**` crosses separators.
#[test]
fn globstar_matches_across_segments() {
    assert!(is_match("**.txt", "dir/file.txt"));
    assert!(is_match("**", "a/b/c"));
    assert!(is_match("**", ""));
}

/// Verifies `?` consumes exactly one non-separator character.
#[test]
fn question_mark_is_single_character() {
    assert!(is_match("???", "abc"));
    assert!(!is_match("???", "ab"));
    assert!(!is_match("a?c", "a/c"));
}

/// Verifies a whole-component `**` may match zero directory levels.
#[test]
fn component_globstar_matches_zero_levels() {
    assert!(is_match("dir/**/file.txt", "dir/file.txt"));
    assert!(is_match("dir/**/file.txt", "dir/x/y/file.txt"));
    assert!(is_match("**/file.txt", "file.txt"));
}

/// Verifies `**` glued to other characters does not gain the zero-level form.
#[test]
fn partial_component_globstar_needs_its_separator() {
    assert!(!is_match("dir/a**/file.txt", "dir/file.txt"));
    assert!(is_match("dir/a**/file.txt", "dir/a/file.txt"));
    assert!(is_match("dir/a**/file.txt", "dir/ab/c/file.txt"));
}

/// Verifies non-wildcard characters are literals, regex syntax included.
#[test]
fn other_characters_are_literals() {
    assert!(is_match("a.b", "a.b"));
    assert!(!is_match("a.b", "axb"));
    assert!(is_match("[ab]", "[ab]"));
    assert!(!is_match("[ab]", "a"));
    assert!(is_match("x\\y", "x\\y"));
}

/// Verifies Unicode literals compare per character.
#[test]
fn unicode_literals_match() {
    assert!(is_match("dokumente/ä?.txt", "dokumente/äb.txt"));
    assert!(is_match("?", "é"));
    assert!(!is_match("?", "ab"));
}

// ============================================================================
// Case Handling
// ============================================================================

/// Verifies the default is case-insensitive.
#[test]
fn default_matching_ignores_case() {
    assert!(is_match("Docs/*.MD", "docs/readme.md"));
}

/// Verifies case-sensitive compilation on request.
#[test]
fn case_sensitive_matching_on_request() {
    let options = GlobOptions::new().with_case_sensitive(true);
    let matcher = Matcher::with_options("Docs/*.MD", &options).unwrap();
    assert!(matcher.is_match("Docs/readme.MD"));
    assert!(!matcher.is_match("docs/readme.md"));
}

// ============================================================================
// Matcher API
// ============================================================================

/// Verifies matchers accept `Path` values.
#[test]
fn matcher_accepts_paths() {
    let matcher = compile("target/**").unwrap();
    assert!(matcher.is_match_path(Path::new("target/debug/build")));
    assert!(!matcher.is_match_path(Path::new("src/main.rs")));
}

/// Verifies the token ceiling rejects oversized patterns.
#[test]
fn oversized_pattern_is_too_complex() {
    let options = GlobOptions::new().with_limits(Limits::default().with_max_tokens(4));
    let error = Matcher::with_options("abcde", &options).unwrap_err();
    assert!(matches!(
        error,
        PatternError::TooManyTokens { tokens: 5, limit: 4, .. }
    ));
    assert_eq!(error.pattern(), Some("abcde"));
}

/// Verifies the free `is_match` ignores the default ceiling.
#[test]
fn one_shot_match_has_no_ceiling() {
    let long = "a".repeat(1000);
    assert!(is_match(&long, &long));
}

/// Verifies the cache hands out shared matchers.
#[test]
fn cache_reuses_compiled_matchers() {
    let cache = MatcherCache::new();
    assert!(cache.is_match("**/*.log", "var/log/syslog.log").unwrap());
    assert!(!cache.is_match("**/*.log", "var/log/syslog").unwrap());
    assert_eq!(cache.len(), 1);
}
