//! Error handling for the minic driver.
//!
//! The scanner never fails; everything that can go wrong in a run happens
//! around it: reading the source, loading configuration, writing the
//! report.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by a driver run.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The source file could not be read.
    #[error("error reading file '{}': {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The report could not be written.
    #[error("error writing file '{}': {source}", .path.display())]
    Write {
        /// Destination of the report
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// A configuration file is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_io_error_display() {
        let err = DriverError::Io {
            path: PathBuf::from("missing.c"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "error reading file 'missing.c': No such file or directory"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_write_error_display() {
        let err = DriverError::Write {
            path: PathBuf::from("out/report.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "error writing file 'out/report.txt': denied");
    }

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("unknown format".to_string());
        assert_eq!(err.to_string(), "configuration error: unknown format");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DriverError = json_err.into();
        assert!(matches!(err, DriverError::Json(_)));
    }
}
