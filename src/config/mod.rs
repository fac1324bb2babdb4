//! Configuration for the doctor browser
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/docfinder/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Command-line flags are applied on top by `main` after loading.

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory endpoint used when nothing else is configured
pub const DEFAULT_SOURCE_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_THEME: &str = "dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory endpoint (http/https URL) or local JSON file path
    pub source_url: String,

    /// Timeout for the directory request
    pub request_timeout_secs: u64,

    /// Initial view as a query string or `path?query` (runtime only)
    pub initial_view: String,

    /// Whether to enable the TUI (disabled = print a snapshot and exit)
    pub enable_tui: bool,

    /// Color theme: "dark" or "light"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            initial_view: String::new(),
            enable_tui: true,
            theme: DEFAULT_THEME.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub source_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/docfinder/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("docfinder").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// # Exits
    /// If the config file exists but cannot be read or parsed. A broken
    /// config fails fast instead of silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::parse_file_config(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `docfinder config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let source_url = env("DOCFINDER_SOURCE")
            .or(file.source_url)
            .unwrap_or(defaults.source_url);

        let request_timeout_secs = env("DOCFINDER_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .or(file.request_timeout_secs)
            .unwrap_or(defaults.request_timeout_secs);

        // Runtime flag: env only
        let enable_tui = env("DOCFINDER_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let theme = env("DOCFINDER_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            source_url,
            request_timeout_secs,
            initial_view: String::new(),
            enable_tui,
            theme,
            logging,
        }
    }
}
