//! The scanner, split by token family.
//!
//! [`Lexer`] and its dispatch live in `core`; each sibling adds one
//! `impl Lexer` block for comments, identifiers, numbers, strings or
//! operators.

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
pub use self::identifier::{is_ident_continue, is_ident_start};
