//! Logging configuration: level, file output, rotation

use serde::Deserialize;
use std::path::PathBuf;

/// Log file rotation strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// Single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config; unknown values fall back to daily
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable JSON file logging (in addition to the log strip or stderr)
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// Prefix for log file names ("docfinder" -> "docfinder.2024-01-15")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "docfinder".to_string(),
        }
    }
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .map(|s| LogRotation::parse(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}
