//! Configuration for the minic driver.
//!
//! Settings come from an optional `minic.toml`; command-line flags are
//! applied on top by the binary.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};
use crate::report::ReportFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "minic.toml";

/// Run configuration.
///
/// ```toml
/// input = "prog.c"
/// output = "tokens.txt"
/// format = "json"
/// echo_source = false
/// verbose = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Source file to scan.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// File the report is written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Report layout.
    #[serde(default)]
    pub format: ReportFormat,

    /// Whether the text report echoes the source before the tokens.
    #[serde(default = "default_true")]
    pub echo_source: bool,

    /// Enables debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Write the report to standard output instead of `output`.
    #[serde(skip)]
    pub to_stdout: bool,
}

fn default_input() -> PathBuf {
    PathBuf::from("test.c")
}

fn default_output() -> PathBuf {
    PathBuf::from("output.txt")
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            format: ReportFormat::default(),
            echo_source: true,
            verbose: false,
            to_stdout: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/minic/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| {
            DriverError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let write_err = |source| DriverError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            DriverError::Config(format!("failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content).map_err(write_err)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("minic").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("minic").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("test.c"));
        assert_eq!(config.output, PathBuf::from("output.txt"));
        assert_eq!(config.format, ReportFormat::Text);
        assert!(config.echo_source);
        assert!(!config.verbose);
        assert!(!config.to_stdout);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let original = Config {
            input: PathBuf::from("prog.c"),
            output: PathBuf::from("tokens.json"),
            format: ReportFormat::Json,
            echo_source: false,
            verbose: true,
            to_stdout: false,
        };
        original.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "format = \"json\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.input, PathBuf::from("test.c"));
        assert!(config.echo_source);
    }

    #[test]
    fn test_stdout_is_not_read_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "to_stdout = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(!config.to_stdout);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "format = \"xml\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(DriverError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/minic.toml"));
        assert!(matches!(result, Err(DriverError::Config(_))));
    }
}
