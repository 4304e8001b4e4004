//! Configuration module for coursepath.

use serde::Deserialize;
use std::path::Path;

use crate::{CoursePathError, Result};

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// System-wide download root. `None` means unset; path derivation
    /// fails for users without a personal root of their own.
    #[serde(default)]
    pub download_root: Option<String>,
    /// Application root directory, used to resolve relative download roots.
    #[serde(default = "default_app_root")]
    pub app_root: String,
}

fn default_app_root() -> String {
    ".".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            download_root: None,
            app_root: default_app_root(),
        }
    }
}

/// Per-segment and total length budgets, in characters.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// Budget for the course segment.
    #[serde(default = "default_folder_budget")]
    pub course: usize,
    /// Budget for the module segment.
    #[serde(default = "default_folder_budget")]
    pub module: usize,
    /// Budget for the lesson segment.
    #[serde(default = "default_folder_budget")]
    pub lesson: usize,
    /// Budget for the file segment (name plus extension).
    #[serde(default = "default_file_budget")]
    pub file: usize,
    /// Ceiling on the total assembled path length.
    #[serde(default = "default_max_path")]
    pub max_path: usize,
}

fn default_folder_budget() -> usize {
    64
}

fn default_file_budget() -> usize {
    80
}

fn default_max_path() -> usize {
    260
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            course: default_folder_budget(),
            module: default_folder_budget(),
            lesson: default_folder_budget(),
            file: default_file_budget(),
            max_path: default_max_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/coursepath.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
///
/// Built once by the embedding application's startup sequence and passed
/// into [`PathBuilder`](crate::PathBuilder) by reference; path derivation
/// never mutates or lazily creates configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Length budgets.
    #[serde(default)]
    pub budgets: BudgetConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(CoursePathError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| CoursePathError::Config(format!("config parse error: {e}")))
    }

    /// Validate the configuration.
    ///
    /// Returns an error if any segment budget or the path ceiling is zero.
    pub fn validate(&self) -> Result<()> {
        let b = &self.budgets;
        if b.course == 0 || b.module == 0 || b.lesson == 0 || b.file == 0 {
            return Err(CoursePathError::Config(
                "segment budgets must be greater than zero".to_string(),
            ));
        }
        if b.max_path == 0 {
            return Err(CoursePathError::Config(
                "max_path must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
