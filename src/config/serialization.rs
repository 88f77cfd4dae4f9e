//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use crate::theme::Theme;
use crate::widget::InputMode;
use anyhow::{Context, Result};

impl Config {
    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        format!(
            r#"# inputspy configuration

# Theme: {themes}
theme = {theme}

# Type the input starts with: text, password, email, number, tel, url, search
initial_type = {initial_type}

# inputmode hint: none, text, decimal, numeric, tel, search, email, url
# An empty string leaves the attribute off
initial_input_mode = {initial_input_mode}

# How terminal input is reported
[capture]
ime_composition = {ime}             # Non-ASCII characters arrive as composition events
keyboard_enhancement = {enhance}    # Request key releases so keyup can be logged

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON file logging (in addition to the System Logs panel)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            themes = Theme::names().join(", "),
            theme = toml_string(&self.theme),
            initial_type = toml_string(self.initial_type.as_str()),
            initial_input_mode = toml_string(InputMode::option_value(self.initial_input_mode)),
            ime = self.capture.ime_composition,
            enhance = self.capture.keyboard_enhancement,
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.to_string_lossy()),
            log_file_rotation = toml_string(self.logging.file_rotation.as_str()),
            log_file_prefix = toml_string(&self.logging.file_prefix),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("Could not determine config path")?;

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        std::fs::write(&path, self.to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// A TOML string literal for `value`, with backslashes and quotes escaped
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
