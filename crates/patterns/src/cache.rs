//! Thread-safe memo of compiled matchers keyed by pattern text.
//!
//! Observers registering the same pattern repeatedly should not pay for regex
//! compilation each time. The cache uses `DashMap` so lookups from many
//! threads proceed without a global lock.

use std::sync::Arc;

use dashmap::DashMap;

use crate::{GlobOptions, Matcher, PatternError};

/// Concurrent cache of [`Matcher`]s sharing one set of [`GlobOptions`].
///
/// # Examples
///
/// ```
/// use patterns::MatcherCache;
///
/// let cache = MatcherCache::new();
/// assert!(cache.is_match("*.rs", "lib.rs").unwrap());
/// assert!(!cache.is_match("*.rs", "src/lib.rs").unwrap());
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MatcherCache {
    options: GlobOptions,
    matchers: DashMap<String, Arc<Matcher>>,
}

impl MatcherCache {
    /// Creates an empty cache using default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache compiling with `options`.
    #[must_use]
    pub fn with_options(options: GlobOptions) -> Self {
        Self {
            options,
            matchers: DashMap::new(),
        }
    }

    /// Returns the cached matcher for `pattern`, compiling it on first use.
    ///
    /// Failed compilations are not cached.
    ///
    /// # Errors
    ///
    /// See [`Matcher::with_options`].
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<Matcher>, PatternError> {
        if let Some(matcher) = self.matchers.get(pattern) {
            return Ok(Arc::clone(matcher.value()));
        }

        // Compile outside the shard lock; a concurrent insert of the same
        // pattern wins and this copy is dropped.
        let compiled = Arc::new(Matcher::with_options(pattern, &self.options)?);
        let entry = self
            .matchers
            .entry(pattern.to_owned())
            .or_insert(compiled);
        Ok(Arc::clone(entry.value()))
    }

    /// Matches `path` against `pattern`, compiling the pattern if needed.
    ///
    /// # Errors
    ///
    /// See [`Matcher::with_options`].
    pub fn is_match(&self, pattern: &str, path: &str) -> Result<bool, PatternError> {
        Ok(self.get_or_compile(pattern)?.is_match(path))
    }

    /// Number of cached matchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns `true` when nothing has been compiled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Drops every cached matcher.
    pub fn clear(&self) {
        self.matchers.clear();
    }

    /// Options used for compilation.
    #[must_use]
    pub const fn options(&self) -> &GlobOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Limits;
    use std::thread;

    #[test]
    fn repeated_lookups_share_one_matcher() {
        let cache = MatcherCache::new();
        let first = cache.get_or_compile("a/*").unwrap();
        let second = cache.get_or_compile("a/*").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failures_are_not_cached() {
        let options = GlobOptions::new().with_limits(Limits::default().with_max_tokens(2));
        let cache = MatcherCache::with_options(options);
        assert!(cache.get_or_compile("abc").is_err());
        assert!(cache.is_empty());
        assert!(cache.is_match("ab", "AB").unwrap());
    }

    #[test]
    fn cache_honours_case_sensitivity() {
        let cache = MatcherCache::with_options(GlobOptions::new().with_case_sensitive(true));
        assert!(cache.options().case_sensitive());
        assert!(!cache.is_match("*.RS", "lib.rs").unwrap());
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = MatcherCache::new();
        cache.get_or_compile("x").unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_callers_agree() {
        let cache = Arc::new(MatcherCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.is_match("**/*.log", "var/log/app.log").unwrap())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(cache.len(), 1);
    }
}
