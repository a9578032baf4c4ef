//! Number literal lexing.
//!
//! Numbers are unsigned decimal: a digit run, optionally followed by `.`
//! and a second digit run. A `.` with no digit after it is not part of
//! the number.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`, `007`
    /// - Fraction: `3.14`, `0.5`
    ///
    /// `3.` scans as `3` and leaves the `.` for the next token.
    ///
    /// # Returns
    ///
    /// A `NUMBER` token whose lexeme is the exact matched text.
    pub fn lex_number(&mut self) -> Token {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        self.finish(TokenKind::Number)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use minic_util::Handler;

    fn lex_num(source: &str) -> Token {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.lex_number()
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex_num("42").lexeme, "42");
        assert_eq!(lex_num("0").lexeme, "0");
        assert_eq!(lex_num("007").lexeme, "007");
    }

    #[test]
    fn test_fraction() {
        let token = lex_num("3.14");
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.lexeme, "3.14");
    }

    #[test]
    fn test_trailing_dot_not_absorbed() {
        assert_eq!(lex_num("3.").lexeme, "3");
        assert_eq!(lex_num("3.x").lexeme, "3");
    }

    #[test]
    fn test_single_fraction_part() {
        assert_eq!(lex_num("1.2.3").lexeme, "1.2");
    }

    #[test]
    fn test_no_exponent_or_suffix() {
        assert_eq!(lex_num("1e10").lexeme, "1");
        assert_eq!(lex_num("0x1F").lexeme, "0");
        assert_eq!(lex_num("10f").lexeme, "10");
    }
}
