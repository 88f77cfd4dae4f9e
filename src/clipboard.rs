//! Clipboard helper for reading and writing the system clipboard
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.
//! Callers go through [`ClipboardAccess`] so tests can swap in a fake.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Plain-text clipboard capability
pub trait ClipboardAccess {
    /// Read plain text from the clipboard
    fn read_text(&mut self) -> Result<String>;

    /// Replace the clipboard content with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The real system clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardAccess for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .get_text()
            .context("Failed to read clipboard text")
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Copy text to the system clipboard
///
/// Returns Ok(()) on success, or an error if clipboard access fails.
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory clipboard that records every write
    #[derive(Debug, Default)]
    pub(crate) struct FakeClipboard {
        pub content: Option<String>,
        pub writes: Vec<String>,
        pub fail: bool,
    }

    impl FakeClipboard {
        pub(crate) fn with_text(text: &str) -> Self {
            Self {
                content: Some(text.to_string()),
                ..Self::default()
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl ClipboardAccess for FakeClipboard {
        fn read_text(&mut self) -> Result<String> {
            if self.fail {
                anyhow::bail!("clipboard unavailable");
            }
            self.content.clone().context("clipboard empty")
        }

        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                anyhow::bail!("clipboard unavailable");
            }
            self.writes.push(text.to_string());
            self.content = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_fake_clipboard_round_trip() {
        let mut clipboard = FakeClipboard::default();
        assert!(clipboard.read_text().is_err());
        clipboard.write_text("hi").unwrap();
        assert_eq!(clipboard.read_text().unwrap(), "hi");
        assert_eq!(clipboard.writes, vec!["hi"]);
    }
}
