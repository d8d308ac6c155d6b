use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Deref;

/// Zero-copy view over one `/`-delimited piece of a path or pattern.
///
/// Equality and hashing compare the viewed characters only, so segments taken
/// from different origin strings compare equal when their text does.
#[derive(Clone, Copy, Debug)]
pub struct Segment<'a> {
    origin: &'a str,
    offset: usize,
    len: usize,
}

impl<'a> Segment<'a> {
    pub(crate) const fn new(origin: &'a str, offset: usize, len: usize) -> Self {
        Self {
            origin,
            offset,
            len,
        }
    }

    /// The viewed text.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        &self.origin[self.offset..self.offset + self.len]
    }

    /// The string this segment was taken from.
    #[must_use]
    pub const fn origin(&self) -> &'a str {
        self.origin
    }

    /// Byte offset of the segment inside [`origin`](Self::origin).
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the segment in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the empty segments produced by leading, doubled or
    /// trailing separators.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for Segment<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Segment<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for Segment<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Segment<'_> {}

impl PartialEq<str> for Segment<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Segment<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Hash for Segment<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Iterator over the `/`-delimited segments of a path.
///
/// Created by [`split_path`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    origin: &'a str,
    cursor: usize,
    finished: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let rest = &self.origin[self.cursor..];
        match rest.find('/') {
            Some(index) => {
                let segment = Segment::new(self.origin, self.cursor, index);
                self.cursor += index + 1;
                Some(segment)
            }
            None => {
                self.finished = true;
                Some(Segment::new(self.origin, self.cursor, rest.len()))
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}

/// Splits `path` on `/` without allocating.
///
/// The boundary rules are exact: a trailing separator yields a final empty
/// segment (marking a directory path), the empty string yields a single empty
/// segment (the root), and leading or doubled separators yield empty
/// segments in place.
///
/// ```
/// use patterns::split_path;
///
/// let parts: Vec<_> = split_path("dir/dir/file").map(|s| s.as_str()).collect();
/// assert_eq!(parts, ["dir", "dir", "file"]);
///
/// let parts: Vec<_> = split_path("dir/").map(|s| s.as_str()).collect();
/// assert_eq!(parts, ["dir", ""]);
///
/// assert_eq!(split_path("").count(), 1);
/// ```
#[must_use]
pub fn split_path(path: &str) -> Segments<'_> {
    Segments {
        origin: path,
        cursor: 0,
        finished: false,
    }
}
