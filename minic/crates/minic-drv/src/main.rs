//! minic CLI - lexical analyzer for MiniC source files.
//!
//! Reads one source file, writes its token report and exits non-zero only
//! when the file cannot be read or the report cannot be written.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minic_drv::{Config, DriverError, ReportFormat, Session};

/// Lexical analyzer for the MiniC language
#[derive(Parser, Debug)]
#[command(name = "minic")]
#[command(author = "MiniC Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for the MiniC language", long_about = None)]
struct Cli {
    /// Source file to scan [default: test.c]
    input: Option<PathBuf>,

    /// Report file [default: output.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Leave the echoed source out of the text report
    #[arg(long)]
    no_source: bool,

    /// Write the report to standard output
    #[arg(long)]
    stdout: bool,

    /// Enable verbose output
    #[arg(short, long, env = "MINIC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "MINIC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "MINIC_NO_COLOR")]
    no_color: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        if let Some(DriverError::Io { .. }) = e.downcast_ref::<DriverError>() {
            eprintln!("help: make sure the file exists and is readable");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = apply_cli(load_config(cli.config.as_deref())?, &cli);
    init_logging(config.verbose, cli.no_color)?;

    let mut session = Session::new(config);
    session.run()?;

    if !session.config.to_stdout {
        println!(
            "Lexical analysis completed. Output written to: {}",
            session.config.output.display()
        );
    }
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to standard error so they never mix with a report written to
/// standard output.
fn init_logging(verbose: bool, no_color: bool) -> minic_drv::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(format!("failed to initialize logging: {}", e)))
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> minic_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Command-line flags take precedence over the configuration file.
fn apply_cli(mut config: Config, cli: &Cli) -> Config {
    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_source {
        config.echo_source = false;
    }
    config.verbose |= cli.verbose;
    config.to_stdout = cli.stdout;
    config
}
