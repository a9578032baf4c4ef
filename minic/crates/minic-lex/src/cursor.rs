//! Forward-only position over the source buffer.
//!
//! The cursor is the only place that knows how bytes map to lines and
//! columns; every span the lexer builds is read off it.

/// Byte offset plus line/column into one source string.
///
/// `position` is a byte offset and only moves forward. `line` and `column`
/// are 1-based; a consumed `'\n'` bumps the line and resets the column,
/// any other character advances the column by one.
///
/// # Example
///
/// ```
/// use minic_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// assert_eq!(cursor.column(), 2);
/// ```
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Cursor at line 1, column 1 of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Character under the cursor; `'\0'` once the input is used up.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Character `offset` places ahead, `'\0'` past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("3.5");
    /// assert_eq!(cursor.peek_char(1), '.');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = &self.source[self.position..];

        // ASCII prefix: index bytes directly.
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..offset].is_ascii() && b < 128 {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Steps over one character. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.position..].chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes the longest run of characters satisfying `predicate`.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// True once every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is next, reporting whether it did.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column, counted in characters.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Text consumed since byte `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("void f");
    /// let start = cursor.position();
    /// cursor.advance_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "void");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
