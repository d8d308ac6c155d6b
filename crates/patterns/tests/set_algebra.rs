//! Integration tests for pattern intersection and union.
//!
//! These exercise the operations the way a watcher uses them: detecting
//! whether two observers can ever fire for the same path, and merging two
//! observers into one covering subscription.

use patterns::{GlobOptions, Limits, PatternError, intersect, intersect_with, is_match, union};

// ============================================================================
// Intersection
// ============================================================================

/// Verifies disjoint extensions do not overlap.
#[test]
fn disjoint_extensions_do_not_overlap() {
    assert_eq!(intersect("dir/*.txt", "dir/*.log").unwrap(), None);
    assert_eq!(intersect("a/*", "b/*").unwrap(), None);
}

/// Verifies a pattern intersected with itself is unchanged.
#[test]
fn self_intersection_is_identity() {
    let overlap = intersect("a/b/*.txt", "a/b/*.txt").unwrap().unwrap();
    assert_eq!(overlap, "a/b/*.txt");
}

/// Verifies a contained pattern is returned verbatim.
#[test]
fn contained_pattern_is_the_overlap() {
    let overlap = intersect("logs/**", "logs/*/error.log").unwrap().unwrap();
    assert_eq!(overlap, "logs/*/error.log");
}

/// Verifies separators constrain `*` during intersection.
#[test]
fn star_cannot_overlap_nested_path() {
    assert_eq!(intersect("*", "a/b").unwrap(), None);
    assert!(intersect("**", "a/b").unwrap().is_some());
}

/// Verifies the zero-width component globstar takes part in intersection.
#[test]
fn component_globstar_overlaps_shallow_path() {
    let overlap = intersect("dir/**/file.txt", "dir/file.txt").unwrap().unwrap();
    assert_eq!(overlap, "dir/file.txt");
}

/// Verifies the overlap covers paths matched by both inputs.
#[test]
fn partial_overlap_covers_shared_paths() {
    let overlap = intersect("src/*.rs", "src/main.*").unwrap().unwrap();
    assert!(is_match(overlap.as_str(), "src/main.rs"));
    assert!(!is_match(overlap.as_str(), "lib/main.rs"));
}

/// Verifies the state ceiling aborts pathological searches.
#[test]
fn pathological_intersection_is_too_complex() {
    let options = GlobOptions::new().with_limits(Limits::default().with_max_states(64));
    let error = intersect_with("*a*a*a*a*a*", "*a*a*a*a*a*b", &options).unwrap_err();
    assert!(matches!(error, PatternError::TooManyStates { limit: 64 }));
    assert!(error.is_too_complex());
}

// ============================================================================
// Union
// ============================================================================

/// Verifies a pattern united with itself is unchanged.
#[test]
fn self_union_is_identity() {
    assert_eq!(union("a/b/*.txt", "a/b/*.txt").unwrap(), "a/b/*.txt");
}

/// Verifies differing literals widen to `?`.
#[test]
fn single_character_difference_widens_to_question_mark() {
    assert_eq!(union("img/a.png", "img/b.png").unwrap(), "img/?.png");
}

/// Verifies differing lengths widen to `*`.
#[test]
fn length_difference_widens_to_star() {
    let merged = union("build.log", "build-1.log").unwrap();
    assert_eq!(merged, "build*.log");
}

/// Verifies differing depths widen to `**`.
#[test]
fn depth_difference_widens_to_globstar() {
    let merged = union("a/x.txt", "a/b/c/x.txt").unwrap();
    assert!(merged.as_str().contains("**"), "{merged}");
    assert!(is_match(merged.as_str(), "a/x.txt"));
    assert!(is_match(merged.as_str(), "a/b/c/x.txt"));
}

/// Verifies a literal already covered by the other pattern is absorbed.
#[test]
fn covered_literal_is_absorbed() {
    assert_eq!(union("var/log/*.log", "var/log/kern.log").unwrap(), "var/log/*.log");
}

/// Verifies the union of two observers covers every path either matches.
#[test]
fn union_covers_both_observers() {
    let merged = union("docs/**/*.md", "docs/*.txt").unwrap();
    for path in ["docs/a.md", "docs/x/y/a.md", "docs/a.txt"] {
        assert!(is_match(merged.as_str(), path), "{merged} misses {path}");
    }
}
