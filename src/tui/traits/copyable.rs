//! Copyable trait for components that provide clipboard content
//!
//! - **Text** (`y`): Human-readable format
//! - **Data** (`Y`): Machine-readable format (JSONL)

use super::Component;

/// Trait for components that can provide content for the clipboard
pub trait Copyable: Component {
    /// Human-readable text, `None` if there's nothing to copy
    fn copy_text(&self) -> Option<String>;

    /// Machine-readable data; defaults to nothing
    fn copy_data(&self) -> Option<String> {
        None
    }

    /// What will be copied (for toast messages)
    fn copy_description(&self) -> String;
}
