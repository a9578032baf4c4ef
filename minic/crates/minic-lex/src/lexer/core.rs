//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-token dispatch and
//! the whole-buffer scan loop.

use minic_util::{DiagnosticBuilder, DiagnosticCode, Handler, Level, Span};
use tracing::{debug, trace};

use super::identifier::is_ident_start;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for MiniC source text.
///
/// The lexer owns a cursor over one immutable source buffer and reports
/// recoverable problems to a [`Handler`]. It never fails: malformed input
/// becomes [`TokenKind::Unknown`] tokens plus diagnostics.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Diagnostic channel.
    pub(crate) handler: &'a mut Handler,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Set once the iterator has handed out everything before `EOF`.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            exhausted: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then scans exactly one token,
    /// dispatching on its first character. At end of input this returns
    /// an `EOF` token with an empty lexeme, and keeps doing so on every
    /// further call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.token_with(TokenKind::Eof, String::new());
        }

        match self.cursor.current_char() {
            '(' => self.lex_single(TokenKind::LeftParen),
            ')' => self.lex_single(TokenKind::RightParen),
            '{' => self.lex_single(TokenKind::LeftBrace),
            '}' => self.lex_single(TokenKind::RightBrace),
            ',' => self.lex_single(TokenKind::Comma),
            ';' => self.lex_single(TokenKind::Semicolon),
            '+' => self.lex_single(TokenKind::Plus),
            '-' => self.lex_single(TokenKind::Minus),
            '*' => self.lex_single(TokenKind::Multiply),
            // Comment openers were consumed by the skipper above.
            '/' => self.lex_single(TokenKind::Divide),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            c => self.lex_unknown(c),
        }
    }

    /// Scans the rest of the input into a token vector.
    ///
    /// The result is in source order and ends with exactly one `EOF` token.
    ///
    /// # Example
    ///
    /// ```
    /// use minic_lex::{Lexer, TokenKind};
    /// use minic_util::Handler;
    ///
    /// let mut handler = Handler::new();
    /// let tokens = Lexer::new("x == 1", &mut handler).scan_tokens();
    /// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    /// assert_eq!(
    ///     kinds,
    ///     [TokenKind::Identifier, TokenKind::Equals, TokenKind::Number, TokenKind::Eof]
    /// );
    /// ```
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            trace!(
                kind = %token.kind,
                lexeme = %token.lexeme,
                line = token.line(),
                column = token.column(),
                "token"
            );
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }

        debug!(
            tokens = tokens.len(),
            errors = self.handler.error_count(),
            warnings = self.handler.warning_count(),
            "scan complete"
        );
        tokens
    }

    /// Lexes a character no rule accepts as a one-character `UNKNOWN`.
    fn lex_unknown(&mut self, c: char) -> Token {
        self.cursor.advance();
        self.report(
            Level::Warning,
            DiagnosticCode::E_UNEXPECTED_CHAR,
            format!("unexpected character '{}'", c.escape_debug()),
        )
        .emit(self.handler);
        self.finish(TokenKind::Unknown)
    }

    /// Builds a token from everything consumed since the token started.
    pub(crate) fn finish(&self, kind: TokenKind) -> Token {
        let lexeme = self.cursor.slice_from(self.token_start);
        self.token_with(kind, lexeme)
    }

    /// Builds a token with an explicit lexeme over the consumed bytes.
    pub(crate) fn token_with(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.token_span())
    }

    /// Span of the current token up to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Starts a diagnostic located at the current token.
    pub(crate) fn report(
        &self,
        level: Level,
        code: DiagnosticCode,
        message: impl Into<String>,
    ) -> DiagnosticBuilder {
        DiagnosticBuilder::new(level, message)
            .code(code)
            .span(self.token_span())
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token before `EOF`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.exhausted = true;
            None
        } else {
            Some(token)
        }
    }
}
