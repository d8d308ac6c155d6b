//! Integration tests for pattern decomposition and path segmentation.
//!
//! A decomposition tells a watcher which directory to open and how many
//! levels below it to enumerate.

use patterns::{Pattern, SuffixDepth, decompose, split_path};

// ============================================================================
// Prefix and Suffix
// ============================================================================

/// Verifies the prefix ends at the last separator before the first wildcard.
#[test]
fn prefix_stops_before_wildcard_segment() {
    let parts = decompose("dir/dir/*/*.txt");
    assert_eq!(parts.prefix(), "dir/dir/");
    assert_eq!(parts.suffix(), "*/*.txt");
    assert_eq!(parts.suffix_depth(), SuffixDepth::Bounded(2));
}

/// Verifies a wildcard-free pattern is all prefix.
#[test]
fn literal_pattern_is_all_prefix() {
    let parts = decompose("dir/dir/file.txt");
    assert_eq!(parts.prefix(), "dir/dir/file.txt");
    assert_eq!(parts.suffix(), "");
    assert_eq!(parts.suffix_depth(), SuffixDepth::Bounded(0));
    assert!(parts.is_literal());
}

/// Verifies a question mark counts as a wildcard.
#[test]
fn question_mark_starts_the_suffix() {
    let parts = decompose("var/log/app?.log");
    assert_eq!(parts.prefix(), "var/log/");
    assert_eq!(parts.suffix(), "app?.log");
    assert_eq!(parts.suffix_depth(), SuffixDepth::Bounded(1));
}

/// Verifies a leading separator stays in the prefix.
#[test]
fn absolute_pattern_keeps_root_in_prefix() {
    let parts = decompose("/etc/*.conf");
    assert_eq!(parts.prefix(), "/etc/");
    let root: Vec<_> = parts.prefix_segments().map(|s| s.as_str()).collect();
    assert_eq!(root, ["", "etc"]);
}

// ============================================================================
// Suffix Depth
// ============================================================================

/// Verifies depth counts every segment of the suffix.
#[test]
fn depth_counts_suffix_segments() {
    assert_eq!(decompose("*").suffix_depth(), SuffixDepth::Bounded(1));
    assert_eq!(decompose("a/*/b/c").suffix_depth(), SuffixDepth::Bounded(3));
    assert_eq!(decompose("a/b*/c/d/e").suffix_depth(), SuffixDepth::Bounded(4));
}

/// Verifies any globstar in the suffix makes the depth unbounded.
#[test]
fn globstar_anywhere_is_unbounded() {
    assert_eq!(decompose("**").suffix_depth(), SuffixDepth::Unbounded);
    assert_eq!(decompose("src/*/**/x").suffix_depth(), SuffixDepth::Unbounded);
    assert_eq!(decompose("src/**").prefix(), "src/");
}

/// Verifies depth bounds which levels need enumerating.
#[test]
fn depth_limits_enumeration() {
    let depth = decompose("photos/*/*.jpg").suffix_depth();
    assert!(depth.reaches(0));
    assert!(depth.reaches(1));
    assert!(!depth.reaches(2));
}

/// Verifies `Pattern` exposes the same decomposition.
#[test]
fn pattern_type_decomposes() {
    let pattern = Pattern::new("music/**/*.flac");
    assert_eq!(pattern.decompose(), decompose("music/**/*.flac"));
}

// ============================================================================
// Path Segments
// ============================================================================

/// Verifies segments borrow from the original path.
#[test]
fn segments_report_offsets() {
    let path = "usr/local/bin";
    let segments: Vec<_> = split_path(path).collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1], "local");
    assert_eq!(segments[1].offset(), 4);
    assert_eq!(segments[2].len(), 3);
}

/// Verifies empty components are preserved.
#[test]
fn empty_components_are_segments() {
    let parts: Vec<_> = split_path("a//b/").map(|s| s.as_str()).collect();
    assert_eq!(parts, ["a", "", "b", ""]);
    assert_eq!(split_path("").count(), 1);
}
