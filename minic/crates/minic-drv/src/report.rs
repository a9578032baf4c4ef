//! Token reports.
//!
//! A report lists every token of one source file. The text layout is the
//! classic one consumed by existing tooling; JSON carries the same tokens
//! plus the diagnostics in machine-readable form.

use std::fmt;

use clap::ValueEnum;
use minic_lex::Token;
use minic_util::Diagnostic;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Width of the `=` rule framing the echoed source.
pub const SEPARATOR_WIDTH: usize = 51;

/// Report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `Token{...}` line per token, optionally preceded by the source
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Everything a report is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Source file name as given by the user
    pub file: &'a str,
    /// Complete source text
    pub source: &'a str,
    /// Scanned tokens, ending in `EOF`
    pub tokens: &'a [Token],
    /// Diagnostics raised while scanning
    pub diagnostics: &'a [Diagnostic],
}

impl<'a> Report<'a> {
    /// Renders the report in `format`.
    ///
    /// `echo_source` only affects the text layout.
    pub fn render(&self, format: ReportFormat, echo_source: bool) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text(echo_source)),
            ReportFormat::Json => self.render_json(),
        }
    }

    /// Renders the text layout:
    ///
    /// ```text
    /// Reading from file: test.c
    /// Source code:
    /// ===================================================
    /// int x;
    /// ===================================================
    ///
    /// Tokens:
    /// Token{type=INT, value='int', line=1, col=1}
    /// ...
    /// ```
    ///
    /// Without `echo_source` the block from `Source code:` through the
    /// blank line is left out.
    pub fn render_text(&self, echo_source: bool) -> String {
        TextReport {
            report: self,
            echo_source,
        }
        .to_string()
    }

    /// Renders the JSON document.
    pub fn render_json(&self) -> Result<String> {
        let json = JsonReport {
            file: self.file,
            tokens: self.tokens.iter().map(JsonToken::from).collect(),
            diagnostics: self.diagnostics.iter().map(JsonDiagnostic::from).collect(),
        };
        let mut out = serde_json::to_string_pretty(&json)?;
        out.push('\n');
        Ok(out)
    }
}

struct TextReport<'r, 'a> {
    report: &'r Report<'a>,
    echo_source: bool,
}

impl fmt::Display for TextReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reading from file: {}", self.report.file)?;
        if self.echo_source {
            let separator = "=".repeat(SEPARATOR_WIDTH);
            writeln!(f, "Source code:")?;
            writeln!(f, "{}", separator)?;
            writeln!(f, "{}", self.report.source)?;
            writeln!(f, "{}", separator)?;
            writeln!(f)?;
        }
        writeln!(f, "Tokens:")?;
        for token in self.report.tokens {
            writeln!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    tokens: Vec<JsonToken<'a>>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    kind: &'static str,
    lexeme: &'a str,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Token> for JsonToken<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.name(),
            lexeme: &token.lexeme,
            line: token.line(),
            column: token.column(),
        }
    }
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    level: String,
    code: Option<String>,
    message: &'a str,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Diagnostic> for JsonDiagnostic<'a> {
    fn from(diag: &'a Diagnostic) -> Self {
        Self {
            level: diag.level.to_string(),
            code: diag.code.map(|code| code.as_str()),
            message: &diag.message,
            line: diag.span.line,
            column: diag.span.column,
        }
    }
}
