//! Source location tracking for error reporting.
//!
//! Provides [`Span`] to tag every AST and IR node with the place in the
//! script source it came from.

use std::fmt;

/// A span of source code, represented by its starting position.
///
/// `line` is 1-indexed; `offset` is the 0-indexed byte offset of the first
/// character from the start of the source text. Spans are only used for
/// diagnostics and never influence analysis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: u32,
    /// Byte offset from the start of the source.
    pub offset: u32,
    /// Length in bytes.
    pub len: u32,
}

impl Span {
    /// Create a new span from a line, offset, and length.
    #[inline]
    pub fn new(line: u32, offset: u32, len: u32) -> Self {
        Self { line, offset, len }
    }

    /// Create a zero-length span at a position.
    #[inline]
    pub fn point(line: u32, offset: u32) -> Self {
        Self {
            line,
            offset,
            len: 0,
        }
    }

    /// Whether this span is empty (zero length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The length of this span in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Byte offset one past the end of this span.
    #[inline]
    pub fn end(&self) -> u32 {
        self.offset + self.len
    }

    /// Merge two spans into one covering both.
    ///
    /// The line of the earlier span is kept.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let (first, _) = if self.offset <= other.offset {
            (self, other)
        } else {
            (other, self)
        };
        let start = self.offset.min(other.offset);
        let end = self.end().max(other.end());
        Span {
            line: first.line,
            offset: start,
            len: end - start,
        }
    }

    /// Slice the covered text out of `source`, if the span is in range.
    pub fn snippet<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.offset as usize..self.end() as usize)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.offset)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_basics() {
        let span = Span::new(1, 5, 10);
        assert_eq!(span.len(), 10);
        assert_eq!(span.end(), 15);
        assert!(!span.is_empty());

        let empty = Span::point(1, 5);
        assert!(empty.is_empty());
    }

    #[test]
    fn span_display() {
        let span = Span::new(3, 15, 5);
        assert_eq!(format!("{}", span), "3:15");
    }

    #[test]
    fn span_merge_disjoint() {
        let span1 = Span::new(1, 5, 3);
        let span2 = Span::new(1, 10, 3);
        let merged = span1.merge(span2);

        assert_eq!(merged.offset, 5);
        assert_eq!(merged.len, 8);
    }

    #[test]
    fn span_merge_keeps_earlier_line() {
        let span1 = Span::new(3, 40, 2);
        let span2 = Span::new(1, 4, 6);
        let merged = span1.merge(span2);

        assert_eq!(merged.line, 1);
        assert_eq!(merged.offset, 4);
        assert_eq!(merged.len, 38);
    }

    #[test]
    fn span_snippet() {
        let source = "int x = 5;";
        assert_eq!(Span::new(1, 4, 1).snippet(source), Some("x"));
        assert_eq!(Span::new(1, 40, 1).snippet(source), None);
    }
}
