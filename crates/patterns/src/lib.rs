#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `patterns` is the glob engine behind a virtual file system's file
//! watching: it decides which paths an observer's pattern covers, which
//! directory an enumeration can start from, and how two observers' patterns
//! relate. Patterns use three wildcards: `?` (one character other than `/`),
//! `*` (any run of characters other than `/`) and `**` (any run of characters,
//! `/` included). Every other character is a literal; there is no escaping,
//! no character classes and no brace expansion.
//!
//! # Design
//!
//! - [`Tokenizer`] lexes pattern text into [`Token`]s, and [`split_path`]
//!   yields borrowed [`Segment`]s of a path without allocating.
//! - [`decompose`] splits a pattern into a literal directory prefix and a
//!   wildcard suffix together with the number of directory levels the suffix
//!   spans ([`SuffixDepth`]).
//! - [`Matcher`] compiles a pattern once into an anchored regular expression.
//!   [`MatcherCache`] memoises matchers across threads.
//! - [`intersect`] and [`union`] compute set operations directly on token
//!   streams, so overlapping observers can be detected or merged without
//!   enumerating a single path.
//!
//! # Invariants
//!
//! - `decompose(p).prefix() + decompose(p).suffix() == p`, and the prefix never
//!   contains a wildcard.
//! - A pattern without wildcards matches exactly the path spelled the same way.
//! - Every path matched by either input of [`union`] is matched by its result.
//! - [`intersect`] returns `None` only when no path matches both inputs, and
//!   returns a pattern unchanged when it is contained in the other.
//! - Literal comparison is case-insensitive unless
//!   [`GlobOptions::with_case_sensitive`] says otherwise, for matching and
//!   for the set operations alike.
//!
//! # Errors
//!
//! Operations that may be expensive take [`GlobOptions`] whose [`Limits`]
//! bound the token count of inputs and the number of search states. Exceeding
//! either yields [`PatternError::TooManyTokens`] or
//! [`PatternError::TooManyStates`]; the engine never degrades to a partial
//! answer.
//!
//! # Examples
//!
//! ```
//! use patterns::{Matcher, SuffixDepth, decompose, intersect, union};
//!
//! let parts = decompose("projects/*/src/*.rs");
//! assert_eq!(parts.prefix(), "projects/");
//! assert_eq!(parts.suffix_depth(), SuffixDepth::Bounded(3));
//!
//! let matcher = Matcher::new("projects/**/*.rs").unwrap();
//! assert!(matcher.is_match("projects/app/src/main.rs"));
//!
//! assert_eq!(intersect("*.txt", "*.log").unwrap(), None);
//!
//! let merged = union("logs/a.log", "logs/b.log").unwrap();
//! assert!(Matcher::new(merged).unwrap().is_match("logs/b.log"));
//! ```
//!
//! # See also
//!
//! - [`debug_pattern`] for the structured tracing events emitted when the
//!   `tracing` feature is enabled.

mod algebra;
mod cache;
pub mod debug_pattern;
mod decompose;
mod error;
mod matcher;
mod options;
mod pattern;
mod segment;
mod token;

pub use algebra::{intersect, intersect_with, union, union_with};
pub use cache::MatcherCache;
pub use decompose::{Decomposition, SuffixDepth, decompose};
pub use error::PatternError;
pub use matcher::{Matcher, compile, compile_os, compile_with, is_match};
pub use options::{DEFAULT_MAX_STATES, DEFAULT_MAX_TOKENS, GlobOptions, Limits};
pub use pattern::Pattern;
pub use segment::{Segment, Segments, split_path};
pub use token::{Token, Tokenizer, is_glob_pattern, tokenize};
