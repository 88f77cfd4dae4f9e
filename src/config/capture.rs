//! Capture configuration: how terminal input is turned into browser events

use serde::Deserialize;

/// Capture settings
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Report non-ASCII characters as IME commits (composition events, keyCode 229)
    pub ime_composition: bool,

    /// Ask the terminal for key release events (kitty keyboard protocol).
    /// `keyup` is only logged when the terminal honors this.
    pub keyboard_enhancement: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            ime_composition: true,
            keyboard_enhancement: true,
        }
    }
}

/// Capture settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileCapture {
    pub ime_composition: Option<bool>,
    pub keyboard_enhancement: Option<bool>,
}

impl CaptureConfig {
    pub fn from_file(file: Option<FileCapture>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            ime_composition: file.ime_composition.unwrap_or(defaults.ime_composition),
            keyboard_enhancement: file
                .keyboard_enhancement
                .unwrap_or(defaults.keyboard_enhancement),
        }
    }
}
