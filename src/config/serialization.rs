//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use super::Config;

impl Config {
    /// Render the persisted subset of the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# docfinder configuration

# Doctor directory: an http(s) URL or a local JSON file
source_url = {source:?}

# Request timeout in seconds
request_timeout_secs = {timeout}

# Theme: dark, light
theme = {theme:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {level:?}
# JSON file logging (in addition to the log strip or stderr)
file_enabled = {file_enabled}
file_dir = {file_dir:?}
file_rotation = "{rotation}"  # hourly, daily, never
file_prefix = {prefix:?}
"#,
            source = self.source_url,
            timeout = self.request_timeout_secs,
            theme = self.theme,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            rotation = self.logging.file_rotation.as_str(),
            prefix = self.logging.file_prefix,
        )
    }
}
