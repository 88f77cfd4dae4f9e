//! Configuration for the input inspector
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/inputspy/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Command-line flags are applied on top by `cli`.

use crate::widget::{InputMode, InputType};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod capture;
mod observability;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use capture::{CaptureConfig, FileCapture};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Spy Dark", "Spy Light", "Terminal"
    pub theme: String,

    /// Type the input starts with
    pub initial_type: InputType,

    /// Input mode hint the input starts with (`None` = attribute absent)
    pub initial_input_mode: Option<InputMode>,

    /// Event capture settings
    pub capture: CaptureConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Spy Dark".to_string(),
            initial_type: InputType::Text,
            initial_input_mode: None,
            capture: CaptureConfig::default(),
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
    pub theme: Option<String>,
    pub initial_type: Option<String>,
    pub initial_input_mode: Option<String>,

    /// Optional [capture] section
    pub capture: Option<FileCapture>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/inputspy/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("inputspy").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// Exits if the file exists but cannot be read or parsed. A broken
    /// config should fail fast with a clear error.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return FileConfig::default(),
            Err(e) => config_error("Cannot read configuration file", &path, &e),
        };

        toml::from_str(&contents)
            .unwrap_or_else(|e| config_error("Failed to parse configuration file", &path, &e))
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        Self::from_sources(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("INPUTSPY_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Initial type: env > file > default (unknown names fall back with a warning)
        let initial_type = env("INPUTSPY_TYPE")
            .or(file.initial_type)
            .and_then(|name| match name.parse::<InputType>() {
                Ok(t) => Some(t),
                Err(e) => {
                    eprintln!("Warning: {}, using \"text\"", e);
                    None
                }
            })
            .unwrap_or(defaults.initial_type);

        // Initial input mode: env > file > default ("" = attribute absent)
        let initial_input_mode = env("INPUTSPY_INPUTMODE")
            .or(file.initial_input_mode)
            .and_then(|name| match InputMode::parse_option(&name) {
                Ok(mode) => Some(mode),
                Err(e) => {
                    eprintln!("Warning: {}, leaving inputmode unset", e);
                    None
                }
            })
            .unwrap_or(defaults.initial_input_mode);

        let capture = CaptureConfig::from_file(file.capture);
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            initial_type,
            initial_input_mode,
            capture,
            logging,
        }
    }
}

/// Print a boxed error and exit
fn config_error(headline: &str, path: &Path, err: &dyn std::fmt::Display) -> ! {
    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║  CONFIG ERROR - {:<45}║", headline);
    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
    eprintln!("  File: {}\n", path.display());
    eprintln!("  Error: {}\n", err);
    eprintln!("  To reset, run `inputspy config --reset`.\n");
    std::process::exit(1);
}
