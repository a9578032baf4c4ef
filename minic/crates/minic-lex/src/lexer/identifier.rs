//! Identifier and keyword lexing.
//!
//! Identifiers are ASCII only: `[A-Za-z_][A-Za-z0-9_]*`.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use minic_lex::is_ident_start;
///
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a maximal run of identifier characters, then checks the
    /// text against the keyword table. The lexeme is the matched text in
    /// both cases.
    pub fn lex_identifier(&mut self) -> Token {
        self.cursor.advance_while(is_ident_continue);

        let kind = keyword_from_ident(self.cursor.slice_from(self.token_span().start))
            .unwrap_or(TokenKind::Identifier);
        self.finish(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use minic_util::Handler;

    fn lex_ident(source: &str) -> Token {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &mut handler);
        lexer.lex_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("foo");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme, "foo");
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(lex_ident("_tmp_2x").lexeme, "_tmp_2x");
        assert_eq!(lex_ident("_").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_identifier_stops_at_non_ident_char() {
        assert_eq!(lex_ident("abc+d").lexeme, "abc");
        assert_eq!(lex_ident("abcé").lexeme, "abc");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_ident("if").kind, TokenKind::If);
        assert_eq!(lex_ident("else").kind, TokenKind::Else);
        assert_eq!(lex_ident("while").kind, TokenKind::While);
        assert_eq!(lex_ident("for").kind, TokenKind::For);
        assert_eq!(lex_ident("int").kind, TokenKind::Int);
        assert_eq!(lex_ident("float").kind, TokenKind::Float);
        assert_eq!(lex_ident("return").kind, TokenKind::Return);
        assert_eq!(lex_ident("void").kind, TokenKind::Void);
    }

    #[test]
    fn test_keyword_keeps_lexeme() {
        let token = lex_ident("return");
        assert_eq!(token.lexeme, "return");
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("iffy").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("integer").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("void_").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_ident("If").kind, TokenKind::Identifier);
        assert_eq!(lex_ident("WHILE").kind, TokenKind::Identifier);
    }
}
