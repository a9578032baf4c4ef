//! Source locations.
//!
//! A [`Span`] ties a half-open byte range of the source buffer to the
//! human-readable line/column of its first character. Both are recorded
//! while scanning, so nothing downstream has to recount lines.
//!
//! # Examples
//!
//! ```
//! use minic_util::span::Span;
//!
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.text("int x = 5;"), Some("x"));
//! ```

/// Where a token or diagnostic sits in the source.
///
/// `start..end` indexes bytes of the source buffer; `line` and `column`
/// locate `start` and are 1-based, with columns counted in characters.
///
/// ```
/// use minic_util::span::Span;
///
/// let keyword = Span::new(0, 5, 1, 1);
/// assert_eq!(keyword.len(), 5);
/// assert!(Span::point(3, 1).is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First byte covered
    pub start: usize,
    /// One past the last byte covered
    pub end: usize,
    /// Line of `start`
    pub line: u32,
    /// Column of `start`
    pub column: u32,
}

impl Span {
    /// All-zero span for diagnostics that are not tied to the source.
    ///
    /// Line 0 never occurs in a real span, so renderers can tell it apart.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Span over `start..end` whose first character is at `line:column`.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Zero-width span carrying only a line and column.
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self::new(0, 0, line, column)
    }

    /// True when no bytes are covered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of bytes covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when byte `offset` falls inside the span.
    ///
    /// ```
    /// use minic_util::span::Span;
    ///
    /// let number = Span::new(8, 12, 1, 9);
    /// assert!(number.contains(8));
    /// assert!(!number.contains(12));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        (self.start..self.end).contains(&offset)
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// Line and column come from whichever span starts first.
    ///
    /// ```
    /// use minic_util::span::Span;
    ///
    /// let open = Span::new(4, 5, 1, 5);
    /// let close = Span::new(17, 18, 3, 1);
    /// assert_eq!(open.merge(close), Span::new(4, 18, 1, 5));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span::new(
            self.start.min(other.start),
            self.end.max(other.end),
            first.line,
            first.column,
        )
    }

    /// Slice of `source` this span covers.
    ///
    /// `None` if the range is out of bounds or splits a UTF-8 sequence.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_token_span_fields() {
        let span = Span::new(7, 9, 2, 3);
        assert_eq!((span.start, span.end), (7, 9));
        assert_eq!((span.line, span.column), (2, 3));
        assert_eq!(span.len(), 2);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_point_is_empty() {
        let eof = Span::point(4, 1);
        assert!(eof.is_empty());
        assert_eq!(eof.len(), 0);
        assert!(!eof.contains(0));
    }

    #[test]
    fn test_contains_is_half_open() {
        let ident = Span::new(4, 7, 1, 5);
        assert!(!ident.contains(3));
        assert!(ident.contains(4));
        assert!(ident.contains(6));
        assert!(!ident.contains(7));
    }

    #[test]
    fn test_merge_keeps_earliest_position() {
        let later = Span::new(8, 9, 2, 1);
        let earlier = Span::new(0, 3, 1, 1);
        assert_eq!(later.merge(earlier), Span::new(0, 9, 1, 1));
        assert_eq!(earlier.merge(later), Span::new(0, 9, 1, 1));
    }

    #[test]
    fn test_text_slices_source() {
        let source = "float y = 3.14;";
        assert_eq!(Span::new(0, 5, 1, 1).text(source), Some("float"));
        assert_eq!(Span::new(10, 14, 1, 11).text(source), Some("3.14"));
        assert_eq!(Span::new(10, 40, 1, 11).text(source), None);
    }

    #[test]
    fn test_text_rejects_split_char() {
        assert_eq!(Span::new(0, 1, 1, 1).text("é"), None);
        assert_eq!(Span::new(0, 2, 1, 1).text("é"), Some("é"));
    }

    #[test]
    fn test_default_is_dummy() {
        assert_eq!(Span::default(), Span::DUMMY);
    }

    #[quickcheck]
    fn prop_merge_covers_both(a: (u16, u16), b: (u16, u16)) -> bool {
        let a = Span::new(a.0.min(a.1) as usize, a.0.max(a.1) as usize, 1, 1);
        let b = Span::new(b.0.min(b.1) as usize, b.0.max(b.1) as usize, 1, 1);
        let merged = a.merge(b);
        [a, b]
            .iter()
            .all(|s| merged.start <= s.start && s.end <= merged.end)
    }
}
