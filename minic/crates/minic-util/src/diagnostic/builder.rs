//! Fluent construction of diagnostics, and source excerpts to show under
//! them.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// One source line with an underlined column range.
///
/// ```
/// use minic_util::{SourceSnippet, Span};
///
/// let snippet = SourceSnippet::from_source("x = @;", Span::new(4, 5, 1, 5))
///     .unwrap()
///     .with_label("not a MiniC character");
/// assert_eq!(snippet.format(), "  1 | x = @;\n    |     ^ not a MiniC character");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// Text of the line, without its terminator
    pub line: String,
    /// 1-based line number
    pub line_number: usize,
    /// First underlined column (1-based)
    pub start_column: usize,
    /// Column after the last underlined one
    pub end_column: usize,
    /// Text printed after the underline
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Excerpt for `span`: the line it starts on, underlined from its
    /// column to its end or the end of that line, whichever comes first.
    ///
    /// Returns `None` when the span's line is not in `source`, which
    /// includes [`Span::DUMMY`].
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        let line_index = (span.line as usize).checked_sub(1)?;
        let line = source.lines().nth(line_index)?;
        let width = span
            .text(source)
            .and_then(|text| text.split('\n').next())
            .map_or(0, |first| first.chars().count());
        let start_column = span.column as usize;

        Some(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column: start_column + width,
            label: None,
        })
    }

    /// Attach a label printed after the underline.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Two lines: the numbered source line, then a gutter and carets.
    /// An empty range still gets one caret.
    pub fn format(&self) -> String {
        let gutter = self.line_number.to_string().len().max(3);
        let carets = self.end_column.saturating_sub(self.start_column).max(1);

        let mut out = format!("{:>gutter$} | {}\n", self.line_number, self.line);
        out.push_str(&format!("{:>gutter$} | ", ""));
        out.push_str(&" ".repeat(self.start_column.saturating_sub(1)));
        out.push_str(&"^".repeat(carets));
        if let Some(label) = &self.label {
            out.push(' ');
            out.push_str(label);
        }
        out
    }
}

/// Accumulates the parts of a [`Diagnostic`] before it is emitted.
///
/// ```
/// use minic_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use minic_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unterminated block comment")
///     .code(DiagnosticCode::E_UNTERMINATED_COMMENT)
///     .span(Span::new(0, 2, 1, 1))
///     .help("close the comment with `*/`")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Starts a diagnostic with no location.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message, Span::DUMMY),
        }
    }

    /// Starts an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Starts a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Sets the code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Sets the location.
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Adds a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Adds a help line.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Adds an explicit excerpt, replacing the one rendering would
    /// otherwise extract from the span.
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.diagnostic.snippets.push(snippet);
        self
    }

    /// Finishes the diagnostic.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finishes the diagnostic and hands it to `handler`.
    ///
    /// ```
    /// use minic_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::warning("unexpected character '$'").emit(&handler);
    /// assert_eq!(handler.warning_count(), 1);
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_label() {
        let snippet = SourceSnippet {
            line: "x = #;".to_string(),
            line_number: 1,
            start_column: 5,
            end_column: 6,
            label: None,
        }
        .with_label("here");
        assert_eq!(snippet.format(), "  1 | x = #;\n    |     ^ here");
    }

    #[test]
    fn test_format_wide_gutter_and_range() {
        let snippet = SourceSnippet {
            line: "a != bb;".to_string(),
            line_number: 1204,
            start_column: 3,
            end_column: 5,
            label: None,
        };
        assert_eq!(snippet.format(), "1204 | a != bb;\n     |   ^^");
    }

    #[test]
    fn test_from_source_clips_to_first_line() {
        let source = "s = \"ab\ncd";
        let span = Span::new(4, source.len(), 1, 5);
        let snippet = SourceSnippet::from_source(source, span).unwrap();
        assert_eq!(snippet.line, "s = \"ab");
        assert_eq!((snippet.start_column, snippet.end_column), (5, 8));
    }

    #[test]
    fn test_from_source_second_line() {
        let source = "int a;\r\nb = $;\r\n";
        let snippet = SourceSnippet::from_source(source, Span::new(12, 13, 2, 5)).unwrap();
        assert_eq!(snippet.line, "b = $;");
        assert_eq!(snippet.line_number, 2);
    }

    #[test]
    fn test_from_source_dummy_and_missing_line() {
        assert!(SourceSnippet::from_source("abc", Span::DUMMY).is_none());
        assert!(SourceSnippet::from_source("abc", Span::point(9, 1)).is_none());
    }

    #[test]
    fn test_builder_collects_parts() {
        let diag = DiagnosticBuilder::error("unterminated string literal")
            .code(DiagnosticCode::E_UNTERMINATED_STRING)
            .span(Span::new(0, 4, 1, 1))
            .note("string starts on line 1")
            .help("add a closing `\"`")
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_UNTERMINATED_STRING));
        assert_eq!(diag.span, Span::new(0, 4, 1, 1));
        assert_eq!(diag.notes, vec!["string starts on line 1"]);
        assert_eq!(diag.helps, vec!["add a closing `\"`"]);
        assert!(diag.snippets.is_empty());
    }

    #[test]
    fn test_builder_explicit_snippet() {
        let snippet = SourceSnippet::from_source("\"abc", Span::new(0, 4, 1, 1)).unwrap();
        let diag = DiagnosticBuilder::warning("odd").snippet(snippet.clone()).build();
        assert_eq!(diag.snippets, vec![snippet]);
        assert_eq!(diag.span, Span::DUMMY);
    }

    #[test]
    fn test_emit_reaches_handler() {
        let handler = Handler::new();
        DiagnosticBuilder::error("unterminated block comment").emit(&handler);
        assert_eq!(handler.error_count(), 1);
    }
}
