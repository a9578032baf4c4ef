//! String literal lexing.
//!
//! Strings run from `"` to the next `"`. Content is taken verbatim: a
//! backslash is an ordinary character and newlines may appear inside.

use minic_util::{DiagnosticCode, Level};

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// # Returns
    ///
    /// A `STRING` token holding the content between the quotes. A literal
    /// still open at end of input becomes an `UNKNOWN` token with the
    /// partial content, and an error is reported.
    pub fn lex_string(&mut self) -> Token {
        self.cursor.advance();

        let content_start = self.cursor.position();
        self.cursor.advance_while(|c| c != '"');
        let content = self.cursor.slice_from(content_start);

        if self.cursor.is_at_end() {
            let line = self.token_span().line;
            self.report(
                Level::Error,
                DiagnosticCode::E_UNTERMINATED_STRING,
                "unterminated string literal",
            )
            .note(format!("string starts on line {}", line))
            .help("add a closing `\"`")
            .emit(self.handler);
            return self.token_with(TokenKind::Unknown, content);
        }

        self.cursor.advance();
        self.token_with(TokenKind::String, content)
    }
}
