//! [logging] section: filter level and the optional JSON log file

use serde::Deserialize;
use std::path::PathBuf;

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// Single file, never rolled
    Never,
}

impl LogRotation {
    const ALL: [LogRotation; 3] = [LogRotation::Hourly, LogRotation::Daily, LogRotation::Never];

    /// Case-insensitive; unknown names fall back to daily
    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .unwrap_or_default()
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
    /// Filter level for the `inputspy` target (RUST_LOG wins when set)
    pub level: String,
    /// Also write JSON logs to `file_dir`
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix; the appender adds the date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::default(),
            file_prefix: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

/// [logging] as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<PathBuf>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Fill anything the file leaves out from the defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let Some(file) = file else {
            return Self::default();
        };
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .as_deref()
                .map_or(defaults.file_rotation, LogRotation::parse),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}
