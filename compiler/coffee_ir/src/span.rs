//! Source location spans.
//!
//! Spans are 0-based and inclusive on both ends: a one-character token at
//! the start of the file has `first == last == (0, 0)`. Columns count
//! characters, not bytes.

use std::fmt;

/// Inclusive source range expressed as line/column pairs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub first_line: u32,
    pub first_column: u32,
    pub last_line: u32,
    pub last_column: u32,
}

impl Span {
    /// Zero span, used when no better location is available.
    pub const DUMMY: Span = Span::point(0, 0);

    /// Create a new span.
    #[inline]
    pub const fn new(first_line: u32, first_column: u32, last_line: u32, last_column: u32) -> Self {
        Span {
            first_line,
            first_column,
            last_line,
            last_column,
        }
    }

    /// Create a zero-width span at a single position.
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        Span::new(line, column, line, column)
    }

    /// Zero-width span at this span's first position.
    #[inline]
    #[must_use]
    pub const fn start(self) -> Span {
        Span::point(self.first_line, self.first_column)
    }

    /// Zero-width span at this span's last position.
    #[inline]
    #[must_use]
    pub const fn end(self) -> Span {
        Span::point(self.last_line, self.last_column)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.first_line, self.first_column, self.last_line, self.last_column
        )
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first_line, self.first_column)
    }
}
