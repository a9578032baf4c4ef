//! Edge case tests for minic-lex
