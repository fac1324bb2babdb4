//! Configuration tests

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// Serialized defaults must parse back into the same values
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();
    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let config = Config::resolve(parsed.unwrap(), env_from(&[]));
    assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
    assert_eq!(config.request_timeout_secs, 15);
    assert_eq!(config.theme, "dark");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_roundtrip_preserves_custom_values() {
    let mut config = Config::default();
    config.source_url = r"C:\data\doctors.json".to_string();
    config.theme = "light".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Never;

    let parsed = Config::parse_file_config(&config.to_toml()).unwrap();
    let resolved = Config::resolve(parsed, env_from(&[]));
    assert_eq!(resolved.source_url, r"C:\data\doctors.json");
    assert_eq!(resolved.theme, "light");
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Never);
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
source_url = "https://file.example/doctors.json"
request_timeout_secs = 30
"#,
    )
    .unwrap();

    let config = Config::resolve(
        file,
        env_from(&[
            ("DOCFINDER_SOURCE", "./local.json"),
            ("DOCFINDER_TIMEOUT", "5"),
            ("DOCFINDER_NO_TUI", "true"),
        ]),
    );
    assert_eq!(config.source_url, "./local.json");
    assert_eq!(config.request_timeout_secs, 5);
    assert!(!config.enable_tui);
}

#[test]
fn test_invalid_env_timeout_falls_back_to_file() {
    let file = Config::parse_file_config("request_timeout_secs = 30").unwrap();
    let config = Config::resolve(file, env_from(&[("DOCFINDER_TIMEOUT", "soon")]));
    assert_eq!(config.request_timeout_secs, 30);
    assert!(config.enable_tui);
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file_config("source_url = ").is_err());
    assert!(Config::parse_file_config("request_timeout_secs = \"ten\"").is_err());
}
