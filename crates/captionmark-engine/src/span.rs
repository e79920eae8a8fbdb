use std::ops::Range;

use serde::Serialize;

/// A character range `[start, end)` into the original input text.
///
/// Offsets count Unicode scalar values, not bytes, and always refer to the
/// text handed to the parser, never to any rewritten intermediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Converts a byte range of `text` into a character span.
    ///
    /// Both ends must fall on char boundaries.
    pub fn from_byte_range(text: &str, bytes: Range<usize>) -> Self {
        let start = text[..bytes.start].chars().count();
        let end = start + text[bytes.start..bytes.end].chars().count();
        Self { start, end }
    }

    /// Returns the length in characters. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The substring of `text` covered by this span, or `None` if out of bounds.
    pub fn slice(self, text: &str) -> Option<&str> {
        let byte_at = |n: usize| {
            text.char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(text.len()))
                .nth(n)
        };
        let start = byte_at(self.start)?;
        let end = byte_at(self.end)?;
        text.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_range_counts_characters() {
        let text = "caf\u{e9} @bob";
        // "café " is 6 bytes but 5 chars
        let span = Span::from_byte_range(text, 6..10);
        assert_eq!(span, Span::new(5, 9));
        assert_eq!(span.slice(text), Some("@bob"));
    }

    #[test]
    fn slice_out_of_bounds_is_none() {
        assert_eq!(Span::new(2, 9).slice("abc"), None);
        assert_eq!(Span::new(3, 3).slice("abc"), Some(""));
    }

    #[test]
    fn len_saturates() {
        assert_eq!(Span::new(4, 2).len(), 0);
        assert!(Span::new(4, 2).is_empty());
    }
}
