//! minic-lex - Lexical Analyzer for MiniC
//!
//! This crate turns MiniC source text into a flat, ordered sequence of
//! classified tokens. It is the front end of the toolchain: it does not
//! parse, type check or touch the filesystem. It consumes one immutable
//! text buffer and produces a token list ending in exactly one `EOF`.
//!
//! # Example Usage
//!
//! ```
//! use minic_lex::{scan, TokenKind};
//! use minic_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = scan("int x = 5; // set x\n", &mut handler);
//!
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Int,
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert!(handler.diagnostics().is_empty());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, the keyword table and the token value
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `else`, `while`, `for`, `int`, `float`, `return`, `void`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`. Identifiers are ASCII only.
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (no sign, exponent, suffix or hex)
//! - **String**: `"hello"`, taken verbatim with no escape processing
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Assignment**: `=`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//!
//! ## Delimiters
//!
//! `;`, `,`, `(`, `)`, `{`, `}`
//!
//! ## Special
//!
//! - **EOF**: End of input marker
//! - **UNKNOWN**: Unrecognized characters and unterminated strings
//!
//! # Diagnostics
//!
//! The lexer never fails. Problems are reported to the [`Handler`] and
//! scanning continues:
//!
//! | Code    | Level   | Cause                          |
//! |---------|---------|--------------------------------|
//! | `E0101` | warning | unexpected character           |
//! | `E0102` | error   | unterminated string literal    |
//! | `E0103` | error   | unterminated block comment     |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

use minic_util::Handler;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{is_ident_continue, is_ident_start, Lexer};
pub use token::{keyword_from_ident, Token, TokenKind};

/// Scans a complete source buffer.
///
/// Returns every token in source order, ending with exactly one `EOF`.
/// Diagnostics for malformed input go to `handler`; none of them stop the
/// scan.
pub fn scan(source: &str, handler: &mut Handler) -> Vec<Token> {
    Lexer::new(source, handler).scan_tokens()
}
