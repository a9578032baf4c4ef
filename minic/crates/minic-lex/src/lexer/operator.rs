//! Operator and punctuation lexing.
//!
//! `=`, `!`, `<` and `>` look one character ahead for a trailing `=`.
//! Everything else is a single character.

use minic_util::{DiagnosticCode, Level};

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a one-character token of the given kind.
    pub fn lex_single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.finish(kind)
    }

    /// Lexes assign or equals.
    ///
    /// Handles: `=`, `==`
    pub fn lex_equals(&mut self) -> Token {
        self.lex_with_equals(TokenKind::Equals, TokenKind::Assign)
    }

    /// Lexes not-equals.
    ///
    /// Handles: `!=`. A lone `!` has no meaning and is `UNKNOWN`.
    pub fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            return self.finish(TokenKind::NotEquals);
        }

        self.report(
            Level::Warning,
            DiagnosticCode::E_UNEXPECTED_CHAR,
            "unexpected character '!'",
        )
        .help("use `!=` to compare for inequality")
        .emit(self.handler);
        self.finish(TokenKind::Unknown)
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub fn lex_less(&mut self) -> Token {
        self.lex_with_equals(TokenKind::LessEqual, TokenKind::LessThan)
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub fn lex_greater(&mut self) -> Token {
        self.lex_with_equals(TokenKind::GreaterEqual, TokenKind::GreaterThan)
    }

    fn lex_with_equals(&mut self, with_eq: TokenKind, alone: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.finish(with_eq)
        } else {
            self.finish(alone)
        }
    }
}
