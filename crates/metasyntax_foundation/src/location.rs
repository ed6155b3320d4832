//! Source coordinates.

use std::fmt;

/// A position in source text.
///
/// Lines and columns are 1-based and count characters; the offset is a
/// 0-based byte index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    /// 0-based byte offset.
    pub offset: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub const fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The location of the first character of any input.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Returns the location after consuming `c` from this location.
    #[must_use]
    pub const fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self::new(self.line + 1, 1, self.offset + c.len_utf8())
        } else {
            Self::new(self.line, self.column + 1, self.offset + c.len_utf8())
        }
    }

    /// Returns the location after consuming all of `text`.
    #[must_use]
    pub fn advance_str(self, text: &str) -> Self {
        text.chars().fold(self, Self::advance)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
