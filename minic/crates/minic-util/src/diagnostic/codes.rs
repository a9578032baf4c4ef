//! Stable identifiers attached to scanner diagnostics.
//!
//! # Examples
//!
//! ```
//! use minic_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 102);
//! assert_eq!(code.as_str(), "E0102");
//! ```

use std::fmt;

/// Prefix letter plus number, printed as `E0101`.
///
/// The number is padded to four digits. The `01xx` range is reserved for
/// the lexer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// Letter part, `"E"` for every lexer code.
    pub prefix: &'static str,
    /// Number part, `101` for `E0101`.
    pub number: u32,
}

impl DiagnosticCode {
    /// Code from its two parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 101);
    /// assert_eq!(code.as_str(), "E0101");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Letter part.
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Number part.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Rendered code, as shown in `error[E0102]`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // Lexer codes.

    /// E0101: Character that starts no token
    pub const E_UNEXPECTED_CHAR: Self = Self::new("E", 101);
    /// E0102: String literal runs into end of input
    pub const E_UNTERMINATED_STRING: Self = Self::new("E", 102);
    /// E0103: Block comment runs into end of input
    pub const E_UNTERMINATED_COMMENT: Self = Self::new("E", 103);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
