//! Diagnostics: what went wrong, where, and how to show it.
//!
//! Phases never print. They push [`Diagnostic`]s into a [`Handler`] and
//! carry on; the driver decides how the collected diagnostics are shown.
//!
//! # Examples
//!
//! ```
//! use minic_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use minic_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unexpected character '@'")
//!     .code(DiagnosticCode::E_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;

use crate::Span;

/// Severity of a diagnostic.
///
/// ```
/// use minic_util::diagnostic::Level;
///
/// assert_eq!(Level::Warning.to_string(), "warning");
/// assert!(Level::Error.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Malformed input the scanner had to recover from
    Error,
    /// Suspicious input that still produced a token
    Warning,
    /// Context attached to another diagnostic
    Note,
    /// Suggested fix
    Help,
}

impl Level {
    /// Returns true for [`Level::Error`]
    #[inline]
    pub fn is_error(self) -> bool {
        self == Level::Error
    }

    fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message about the source, with its severity and location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity
    pub level: Level,
    /// Headline, e.g. `unterminated string literal`
    pub message: String,
    /// Offending source range, or [`Span::DUMMY`]
    pub span: Span,
    /// Stable code such as `E0102`
    pub code: Option<DiagnosticCode>,
    /// Extra context lines
    pub notes: Vec<String>,
    /// Suggested fixes
    pub helps: Vec<String>,
    /// Explicit excerpts; when empty, one is extracted from `span`
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Bare diagnostic with no code, notes or excerpts.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Shorthand for [`Level::Error`].
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Shorthand for [`Level::Warning`].
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Sets the code.
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Adds a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Adds an excerpt.
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic for a terminal.
    ///
    /// The header carries level and code, followed by the location, a
    /// snippet of the source line (taken from the attached snippets, or
    /// extracted from `source` when none were attached) and any notes and
    /// helps. Every line ends in `\n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minic_util::{Diagnostic, DiagnosticCode, Span};
    ///
    /// let source = "x = \"abc";
    /// let diag = Diagnostic::error("unterminated string literal", Span::new(4, 8, 1, 5))
    ///     .with_code(DiagnosticCode::E_UNTERMINATED_STRING);
    /// let text = diag.render(source);
    /// assert!(text.starts_with("error[E0102]: unterminated string literal"));
    /// assert!(text.contains(" --> 1:5"));
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };

        if self.span != Span::DUMMY {
            out.push_str(&format!(" --> {}:{}\n", self.span.line, self.span.column));
        }

        let extracted;
        let snippets = if self.snippets.is_empty() {
            extracted = SourceSnippet::from_source(source, self.span);
            extracted.as_slice()
        } else {
            self.snippets.as_slice()
        };
        for snippet in snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }

        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.span != Span::DUMMY {
            write!(f, " at line {}, column {}", self.span.line, self.span.column)?;
        }
        Ok(())
    }
}

/// Collects diagnostics in emission order.
///
/// Emitting only needs `&self`, so a builder can emit into the handler of
/// whoever is holding it.
///
/// ```
/// use minic_util::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unterminated string literal", Span::DUMMY));
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    panic_on_error: bool,
}

impl Handler {
    /// Empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler that panics on the first error-level diagnostic, so a test
    /// fails at the point of emission.
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::default(),
            panic_on_error: true,
        }
    }

    /// Records `diagnostic`.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level.is_error() {
            panic!("error diagnostic emitted: {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// True once any error has been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Number of errors recorded.
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Number of warnings recorded.
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Forgets everything recorded.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        let names: Vec<_> = [Level::Error, Level::Warning, Level::Note, Level::Help]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, ["error", "warning", "note", "help"]);
        assert!(!Level::Warning.is_error());
    }

    #[test]
    fn test_with_methods() {
        let snippet = SourceSnippet::from_source("@", Span::new(0, 1, 1, 1)).unwrap();
        let diag = Diagnostic::warning("unexpected character '@'", Span::new(0, 1, 1, 1))
            .with_code(DiagnosticCode::E_UNEXPECTED_CHAR)
            .with_note("only ASCII punctuation from the operator set is accepted")
            .with_help("remove it")
            .with_snippet(snippet);
        assert_eq!(diag.code, Some(DiagnosticCode::E_UNEXPECTED_CHAR));
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.helps, vec!["remove it"]);
        assert_eq!(diag.snippets.len(), 1);
    }

    #[test]
    fn test_display_one_line() {
        let diag = Diagnostic::warning("unexpected character '@'", Span::new(3, 4, 2, 1))
            .with_code(DiagnosticCode::E_UNEXPECTED_CHAR);
        assert_eq!(
            diag.to_string(),
            "warning[E0101]: unexpected character '@' at line 2, column 1"
        );
        assert_eq!(
            Diagnostic::error("no location", Span::DUMMY).to_string(),
            "error: no location"
        );
    }

    #[test]
    fn test_render_extracts_snippet() {
        let source = "int a;\nb = @;";
        let diag = Diagnostic::warning("unexpected character '@'", Span::new(11, 12, 2, 5));
        assert_eq!(
            diag.render(source),
            "warning: unexpected character '@'\n --> 2:5\n  2 | b = @;\n    |     ^\n"
        );
    }

    #[test]
    fn test_render_prefers_attached_snippet() {
        let source = "x = @;";
        let attached = SourceSnippet::from_source(source, Span::new(4, 5, 1, 5))
            .unwrap()
            .with_label("here");
        let diag = Diagnostic::warning("odd", Span::new(4, 5, 1, 5)).with_snippet(attached);
        let text = diag.render(source);
        assert_eq!(text.matches(" | x = @;").count(), 1);
        assert!(text.contains("^ here\n"));
    }

    #[test]
    fn test_render_notes_and_helps() {
        let diag = Diagnostic::error("unterminated block comment", Span::DUMMY)
            .with_note("comment starts on line 3")
            .with_help("close it with `*/`");
        let text = diag.render("");
        assert!(text.contains("  = note: comment starts on line 3\n"));
        assert!(text.contains("  = help: close it with `*/`\n"));
        assert!(!text.contains("-->"));
    }

    #[test]
    fn test_handler_counts_by_level() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        handler.emit_diagnostic(Diagnostic::error("e", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w2", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::new(Level::Note, "n", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 2);
        assert_eq!(handler.diagnostics().len(), 4);
    }

    #[test]
    fn test_handler_keeps_emission_order() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::warning("first", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("second", Span::DUMMY));
        let messages: Vec<_> = handler.diagnostics().into_iter().map(|d| d.message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_handler_clear() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("gone", Span::DUMMY));
        handler.clear();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_panicking_handler_allows_warnings() {
        let handler = Handler::new_panicking();
        handler.emit_diagnostic(Diagnostic::warning("fine", Span::DUMMY));
        assert_eq!(handler.warning_count(), 1);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            handler.emit_diagnostic(Diagnostic::error("boom", Span::DUMMY));
        }));
        assert!(result.is_err());
    }
}
