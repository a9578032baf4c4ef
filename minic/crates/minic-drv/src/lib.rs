//! minic-drv - Lexical Analysis Driver
//!
//! Connects the scanner to the outside world: reads one source file,
//! scans it, prints diagnostics to standard error and writes a token
//! report.
//!
//! # Example
//!
//! ```no_run
//! use minic_drv::{Config, Session};
//!
//! let mut session = Session::new(Config::default());
//! let summary = session.run()?;
//! println!("{} tokens", summary.tokens);
//! # Ok::<(), minic_drv::DriverError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod report;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use minic_lex::scan;
use minic_util::Handler;
use tracing::{debug, info};

pub use config::Config;
pub use error::{DriverError, Result};
pub use report::{Report, ReportFormat};

/// Reads a complete source file.
pub fn load_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Counts from one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Tokens produced, including `EOF`
    pub tokens: usize,
    /// Error diagnostics raised
    pub errors: usize,
    /// Warning diagnostics raised
    pub warnings: usize,
}

/// One driver run over a single source file.
pub struct Session {
    /// Resolved configuration.
    pub config: Config,
    /// Diagnostics of the most recent scan.
    pub handler: Handler,
}

impl Session {
    /// Creates a session with an empty diagnostic handler.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            handler: Handler::new(),
        }
    }

    /// Loads the input, scans it and writes the report.
    ///
    /// Diagnostics are printed to standard error and counted in the
    /// summary; they never make the run fail.
    pub fn run(&mut self) -> Result<ScanSummary> {
        info!(input = %self.config.input.display(), "reading source");
        let source = load_source(&self.config.input)?;

        let (rendered, summary) = self.process(&source)?;
        self.write_output(&rendered)?;

        info!(
            tokens = summary.tokens,
            errors = summary.errors,
            warnings = summary.warnings,
            "lexical analysis finished"
        );
        Ok(summary)
    }

    /// Scans `source` and renders the report without touching the
    /// filesystem.
    pub fn process(&mut self, source: &str) -> Result<(String, ScanSummary)> {
        self.handler.clear();
        let tokens = scan(source, &mut self.handler);
        let diagnostics = self.handler.diagnostics();

        for diag in &diagnostics {
            eprint!("{}", diag.render(source));
        }

        let file = self.config.input.display().to_string();
        let report = Report {
            file: &file,
            source,
            tokens: &tokens,
            diagnostics: &diagnostics,
        };
        let rendered = report.render(self.config.format, self.config.echo_source)?;

        let summary = ScanSummary {
            tokens: tokens.len(),
            errors: self.handler.error_count(),
            warnings: self.handler.warning_count(),
        };
        Ok((rendered, summary))
    }

    fn write_output(&self, rendered: &str) -> Result<()> {
        if self.config.to_stdout {
            debug!("writing report to stdout");
            return io::stdout()
                .lock()
                .write_all(rendered.as_bytes())
                .map_err(|source| DriverError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                });
        }

        debug!(output = %self.config.output.display(), "writing report");
        fs::write(&self.config.output, rendered).map_err(|source| DriverError::Write {
            path: self.config.output.clone(),
            source,
        })
    }
}
