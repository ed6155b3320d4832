//! Byte ranges of description source.

use std::ops::Range;

use metasyntax_foundation::Location;

/// Where a lexeme or tree node sits in description source: a byte range
/// plus the line and column of its first character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// First byte.
    pub start: usize,
    /// One past the last byte.
    pub end: usize,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Extends this span to the end of `last`, keeping this span's start.
    #[must_use]
    pub const fn covering(self, last: Self) -> Self {
        Self::new(self.start, last.end, self.line, self.column)
    }

    /// Returns where the span starts.
    #[must_use]
    pub const fn location(&self) -> Location {
        Location::new(self.line, self.column, self.start)
    }

    /// Returns the byte range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the covered text, or `None` if the span does not fit `source`.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.range())
    }
}
