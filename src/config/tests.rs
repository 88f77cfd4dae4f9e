//! Configuration tests
//!
//! Round-trip guards: every field written by `to_toml()` must parse back
//! into the same effective config.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap_or_else(|e| panic!("TOML:\n{}\nError: {}", toml_str, e))
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let parsed = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(parsed.theme, config.theme);
    assert_eq!(parsed.initial_type, config.initial_type);
    assert_eq!(parsed.initial_input_mode, None);
    assert_eq!(parsed.logging.level, "info");
    assert_eq!(parsed.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.theme = "Spy Light".to_string();
    config.initial_type = InputType::Password;
    config.initial_input_mode = Some(InputMode::Numeric);
    config.capture.ime_composition = false;
    config.capture.keyboard_enhancement = false;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(parsed.theme, "Spy Light");
    assert_eq!(parsed.initial_type, InputType::Password);
    assert_eq!(parsed.initial_input_mode, Some(InputMode::Numeric));
    assert!(!parsed.capture.ime_composition);
    assert!(!parsed.capture.keyboard_enhancement);
    assert!(parsed.logging.file_enabled);
    assert_eq!(parsed.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_config_roundtrip_escapes_strings() {
    let mut config = Config::default();
    config.logging.file_dir = PathBuf::from(r"C:\Users\me\logs");
    config.logging.file_prefix = r#"spy "debug""#.to_string();

    let parsed = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(parsed.logging.file_dir, PathBuf::from(r"C:\Users\me\logs"));
    assert_eq!(parsed.logging.file_prefix, r#"spy "debug""#);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "Spy Light"
initial_type = "email"
initial_input_mode = "tel"
"#,
    );
    let env: HashMap<&str, &str> = [("INPUTSPY_TYPE", "number"), ("INPUTSPY_INPUTMODE", "")]
        .into_iter()
        .collect();

    let config = Config::from_sources(file, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.theme, "Spy Light");
    assert_eq!(config.initial_type, InputType::Number);
    assert_eq!(config.initial_input_mode, None);
}

#[test]
fn test_missing_sections_use_defaults() {
    let config = Config::from_sources(parse(""), no_env);
    assert_eq!(config.theme, "Spy Dark");
    assert!(config.capture.ime_composition);
    assert!(config.capture.keyboard_enhancement);
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_prefix, "inputspy");
}

#[test]
fn test_unknown_type_falls_back() {
    let file = parse(r#"initial_type = "checkbox""#);
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.initial_type, InputType::Text);
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}
