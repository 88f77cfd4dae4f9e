// Modal system for TUI overlays
//
// A modal captures all input until dismissed. App holds Option<Modal>;
// input routing acts on the returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Blocking notice that must be acknowledged (export failures, empty export)
    Notice { title: String, message: String },
    /// Keyboard shortcuts
    Help,
}

impl Modal {
    pub fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Modal::Notice {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn help() -> Self {
        Modal::Help
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Notice { .. } => match key {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_requires_acknowledgement() {
        let mut modal = Modal::notice("Export", "Nothing to export");
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
    }
}
