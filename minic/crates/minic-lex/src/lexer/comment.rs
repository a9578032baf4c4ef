//! Whitespace and comment skipping.
//!
//! Neither produces tokens. `//` comments stop before their newline so the
//! whitespace loop consumes it; `/* */` comments do not nest.

use minic_util::{DiagnosticBuilder, DiagnosticCode, Span};

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Whitespace is space, tab, carriage return and newline. A `/` only
    /// starts a comment when followed by `/` or `*`; otherwise it is left
    /// for the dispatcher as a divide operator.
    pub fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' => match self.cursor.peek_char(1) {
                    '/' => self.skip_line_comment(),
                    '*' => self.skip_block_comment(),
                    _ => return,
                },
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, not including, its newline.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        self.cursor.advance_while(|c| c != '\n');
    }

    /// Skips a block comment through its closing `*/`.
    ///
    /// A comment still open at end of input is dropped with an error
    /// diagnostic located at its opening `/*`.
    fn skip_block_comment(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }

        DiagnosticBuilder::error("unterminated block comment")
            .code(DiagnosticCode::E_UNTERMINATED_COMMENT)
            .span(Span::new(start, self.cursor.position(), line, column))
            .help("close the comment with `*/`")
            .emit(self.handler);
    }
}
