// Widget module - the single text-entry control under observation
//
// TextInput holds everything a browser input element would: value, caret,
// selection, type and input-mode hint, plus focus state. The translate
// submodule turns terminal input into the event firings that element
// would produce; listeners read state through the `InputState` trait at
// the instant each firing is dispatched.

pub mod keymap;
pub mod translate;

use crate::capture::InputState;
use crate::events::{EventKind, RawEvent};
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

/// Receives widget firings in order
pub trait EventSink {
    fn dispatch(&mut self, kind: EventKind, raw: &RawEvent, state: &dyn InputState);
}

// ═══════════════════════════════════════════════════════════════════════════
// Type and input mode
// ═══════════════════════════════════════════════════════════════════════════

/// The `type` of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Tel,
    Url,
    Search,
}

impl InputType {
    pub fn all() -> &'static [InputType] {
        &[
            InputType::Text,
            InputType::Password,
            InputType::Email,
            InputType::Number,
            InputType::Tel,
            InputType::Url,
            InputType::Search,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Search => "search",
        }
    }

    /// Get the next type in the cycle
    pub fn next(self) -> Self {
        let all = Self::all();
        let current = all.iter().position(|&t| t == self).unwrap_or(0);
        all[(current + 1) % all.len()]
    }

    /// Get the previous type in the cycle
    pub fn prev(self) -> Self {
        let all = Self::all();
        let current = all.iter().position(|&t| t == self).unwrap_or(0);
        all[(current + all.len() - 1) % all.len()]
    }

    /// Email and number inputs expose no selection offsets
    pub fn supports_selection(&self) -> bool {
        !matches!(self, InputType::Email | InputType::Number)
    }

    /// Whether typed or pasted text may be inserted
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            InputType::Number => text
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')),
            _ => true,
        }
    }

    /// Clipboard writes are suppressed for password fields
    pub fn allows_clipboard_write(&self) -> bool {
        *self != InputType::Password
    }
}

impl FromStr for InputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown input type '{}'", s))
    }
}

/// The `inputmode` hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// `inputmode="none"`: no virtual keyboard
    NoKeyboard,
    Text,
    Decimal,
    Numeric,
    Tel,
    Search,
    Email,
    Url,
}

impl InputMode {
    /// Options offered by the control; `None` is the "no value" option
    pub fn options() -> &'static [Option<InputMode>] {
        &[
            None,
            Some(InputMode::NoKeyboard),
            Some(InputMode::Text),
            Some(InputMode::Decimal),
            Some(InputMode::Numeric),
            Some(InputMode::Tel),
            Some(InputMode::Search),
            Some(InputMode::Email),
            Some(InputMode::Url),
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::NoKeyboard => "none",
            InputMode::Text => "text",
            InputMode::Decimal => "decimal",
            InputMode::Numeric => "numeric",
            InputMode::Tel => "tel",
            InputMode::Search => "search",
            InputMode::Email => "email",
            InputMode::Url => "url",
        }
    }

    /// Option value as the control reports it (`""` for the empty option)
    pub fn option_value(mode: Option<InputMode>) -> &'static str {
        mode.map(|m| m.as_str()).unwrap_or("")
    }

    /// Parse an option value; `""` selects the empty option
    pub fn parse_option(s: &str) -> Result<Option<InputMode>, String> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        Self::options()
            .iter()
            .flatten()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .map(Some)
            .ok_or_else(|| format!("unknown input mode '{}'", s))
    }

    /// Next option in the cycle, wrapping through the empty option
    pub fn next_option(current: Option<InputMode>) -> Option<InputMode> {
        let options = Self::options();
        let idx = options.iter().position(|&m| m == current).unwrap_or(0);
        options[(idx + 1) % options.len()]
    }

    /// Previous option in the cycle
    pub fn prev_option(current: Option<InputMode>) -> Option<InputMode> {
        let options = Self::options();
        let idx = options.iter().position(|&m| m == current).unwrap_or(0);
        options[(idx + options.len() - 1) % options.len()]
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TextInput
// ═══════════════════════════════════════════════════════════════════════════

/// Single-line text input
///
/// Caret and anchor are char indices into `value`; offsets reported to
/// listeners are UTF-16 code units.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    /// Selection anchor; `None` when the selection is collapsed
    anchor: Option<usize>,
    input_type: InputType,
    /// `None` means the attribute is absent
    input_mode: Option<InputMode>,
    focused: bool,
    /// Value at focus time or last `change`
    committed: String,
    /// Treat non-ASCII characters as IME commits
    pub ime_composition: bool,
}

impl TextInput {
    pub fn new(input_type: InputType, input_mode: Option<InputMode>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            anchor: None,
            input_type,
            input_mode,
            focused: false,
            committed: String::new(),
            ime_composition: true,
        }
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn input_mode(&self) -> Option<InputMode> {
        self.input_mode
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Apply a new type; values the new type cannot hold are sanitized away
    pub fn set_type(&mut self, input_type: InputType) {
        self.input_type = input_type;
        if !input_type.accepts(&self.value) {
            self.value.clear();
            self.cursor = 0;
            self.anchor = None;
        }
    }

    /// Set the hint, or remove the attribute with `None`
    pub fn set_input_mode(&mut self, input_mode: Option<InputMode>) {
        self.input_mode = input_mode;
    }

    /// Attribute as it would appear in markup, if present
    pub fn input_mode_attribute(&self) -> Option<String> {
        self.input_mode
            .map(|m| format!("inputmode=\"{}\"", m.as_str()))
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn utf16_offset(&self, char_idx: usize) -> usize {
        self.value
            .chars()
            .take(char_idx)
            .map(char::len_utf16)
            .sum()
    }

    /// Selection as ordered char indices (collapsed = caret twice)
    pub fn selection_range(&self) -> (usize, usize) {
        match self.anchor {
            Some(anchor) => (anchor.min(self.cursor), anchor.max(self.cursor)),
            None => (self.cursor, self.cursor),
        }
    }

    pub fn has_selection(&self) -> bool {
        let (start, end) = self.selection_range();
        start != end
    }

    pub fn selected_text(&self) -> String {
        let (start, end) = self.selection_range();
        self.value[self.byte_index(start)..self.byte_index(end)].to_string()
    }

    /// Replace the selection (or insert at the caret)
    fn replace_selection(&mut self, text: &str) {
        let (start, end) = self.selection_range();
        let (from, to) = (self.byte_index(start), self.byte_index(end));
        self.value.replace_range(from..to, text);
        self.cursor = start + text.chars().count();
        self.anchor = None;
    }

    /// Delete the selection, or the char before the caret; false when nothing changed
    fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            self.replace_selection("");
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.anchor = Some(self.cursor - 1);
        self.replace_selection("");
        true
    }

    /// Delete the selection, or the char after the caret; false when nothing changed
    fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            self.replace_selection("");
            return true;
        }
        if self.cursor >= self.char_count() {
            return false;
        }
        self.anchor = Some(self.cursor + 1);
        self.replace_selection("");
        true
    }

    /// Move the caret, optionally extending the selection
    fn move_to(&mut self, target: usize, extend: bool) {
        let target = target.min(self.char_count());
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
        self.cursor = target;
        if self.anchor == Some(self.cursor) {
            self.anchor = None;
        }
    }

    fn select_all(&mut self) {
        let end = self.char_count();
        if end == 0 {
            return;
        }
        self.anchor = Some(0);
        self.cursor = end;
    }

    /// Whether the value differs from the last committed value
    fn is_dirty(&self) -> bool {
        self.value != self.committed
    }

    fn commit(&mut self) {
        self.committed = self.value.clone();
    }

    /// Text as displayed (password bullets)
    pub fn display_value(&self) -> String {
        match self.input_type {
            InputType::Password => "•".repeat(self.char_count()),
            _ => self.value.clone(),
        }
    }

    /// Terminal column of the caret within the displayed value
    pub fn caret_column(&self) -> usize {
        match self.input_type {
            InputType::Password => self.cursor,
            _ => self.value[..self.byte_index(self.cursor)].width(),
        }
    }

    /// Display-column span of the selection, if any
    pub fn selection_columns(&self) -> Option<(usize, usize)> {
        if !self.has_selection() {
            return None;
        }
        let (start, end) = self.selection_range();
        Some(match self.input_type {
            InputType::Password => (start, end),
            _ => (
                self.value[..self.byte_index(start)].width(),
                self.value[..self.byte_index(end)].width(),
            ),
        })
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new(InputType::default(), None)
    }
}

impl InputState for TextInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn selection_start(&self) -> Option<usize> {
        self.input_type
            .supports_selection()
            .then(|| self.utf16_offset(self.selection_range().0))
    }

    fn selection_end(&self) -> Option<usize> {
        self.input_type
            .supports_selection()
            .then(|| self.utf16_offset(self.selection_range().1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with(value: &str) -> TextInput {
        let mut input = TextInput::default();
        input.replace_selection(value);
        input
    }

    #[test]
    fn test_type_cycle_wraps() {
        assert_eq!(InputType::Text.next(), InputType::Password);
        assert_eq!(InputType::Search.next(), InputType::Text);
        assert_eq!(InputType::Text.prev(), InputType::Search);
    }

    #[test]
    fn test_type_parse() {
        assert_eq!("Password".parse::<InputType>(), Ok(InputType::Password));
        assert!("checkbox".parse::<InputType>().is_err());
    }

    #[test]
    fn test_input_mode_options_start_with_empty() {
        assert_eq!(InputMode::options()[0], None);
        assert_eq!(InputMode::option_value(None), "");
        assert_eq!(InputMode::parse_option(""), Ok(None));
        assert_eq!(
            InputMode::parse_option("numeric"),
            Ok(Some(InputMode::Numeric))
        );
        assert_eq!(
            InputMode::parse_option("none"),
            Ok(Some(InputMode::NoKeyboard))
        );
        assert_eq!(InputMode::next_option(Some(InputMode::Url)), None);
        assert_eq!(InputMode::prev_option(None), Some(InputMode::Url));
    }

    #[test]
    fn test_selection_offsets_are_utf16() {
        let mut input = input_with("a😀b");
        assert_eq!(input.selection_start(), Some(4));

        input.move_to(1, false);
        input.move_to(2, true);
        assert_eq!(input.selection_start(), Some(1));
        assert_eq!(input.selection_end(), Some(3));
        assert_eq!(input.selected_text(), "😀");
    }

    #[test]
    fn test_email_and_number_have_no_selection_offsets() {
        let mut input = input_with("12");
        input.set_type(InputType::Number);
        assert_eq!(input.selection_start(), None);
        assert_eq!(input.selection_end(), None);

        input.set_type(InputType::Email);
        assert_eq!(input.selection_start(), None);
    }

    #[test]
    fn test_number_type_sanitizes_value() {
        let mut input = input_with("abc");
        input.set_type(InputType::Number);
        assert_eq!(input.value(), "");

        let mut input = input_with("3.5");
        input.set_type(InputType::Number);
        assert_eq!(input.value(), "3.5");
    }

    #[test]
    fn test_delete_backward_and_forward() {
        let mut input = input_with("abc");
        assert!(input.delete_backward());
        assert_eq!(input.value(), "ab");

        input.move_to(0, false);
        assert!(!input.delete_backward());
        assert!(input.delete_forward());
        assert_eq!(input.value(), "b");

        input.move_to(1, false);
        assert!(!input.delete_forward());
    }

    #[test]
    fn test_replace_selection() {
        let mut input = input_with("hello");
        input.select_all();
        input.replace_selection("あ");
        assert_eq!(input.value(), "あ");
        assert!(!input.has_selection());
        assert_eq!(input.caret_column(), 2);
    }

    #[test]
    fn test_password_display_masks_value() {
        let mut input = input_with("secret");
        input.set_type(InputType::Password);
        assert_eq!(input.display_value(), "••••••");
        assert_eq!(input.value(), "secret");
    }

    #[test]
    fn test_input_mode_attribute_removed_for_empty_option() {
        let mut input = TextInput::default();
        input.set_input_mode(Some(InputMode::Numeric));
        assert_eq!(
            input.input_mode_attribute().as_deref(),
            Some("inputmode=\"numeric\"")
        );
        input.set_input_mode(None);
        assert_eq!(input.input_mode_attribute(), None);
    }
}
