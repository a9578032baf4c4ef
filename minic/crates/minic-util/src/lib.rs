//! minic-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the types shared by every phase of the minic
//! toolchain: source locations and the diagnostic channel. The scanner
//! never aborts on malformed input, so everything it wants to say about the
//! source travels through a [`Handler`] as a [`Diagnostic`].
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. PLAIN VALUES
//!    [`Span`] and [`DiagnosticCode`] are `Copy` and carry no references
//!    into the source, so tokens and diagnostics outlive the scanner.
//!
//! 2. COLLECT, DON'T PRINT
//!    Phases report into a [`Handler`]; the driver decides how and where
//!    diagnostics are rendered.
//!
//! # Example
//!
//! ```
//! use minic_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::Span;
