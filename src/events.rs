// Events that flow from the input widget to the capture layer
//
// The widget translates terminal input into the same event kinds a browser
// text field fires. Each firing is a (EventKind, RawEvent) pair: the kind
// says which listener fired, the raw event carries only the properties that
// kind of event actually exposes.

use serde::Serialize;

/// Every event kind the log can show
///
/// The first nineteen are the monitored platform kinds; the last two are
/// synthetic entries produced by the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    #[serde(rename = "input")]
    Input,
    #[serde(rename = "change")]
    Change,
    #[serde(rename = "keydown")]
    KeyDown,
    #[serde(rename = "keyup")]
    KeyUp,
    #[serde(rename = "keypress")]
    KeyPress,
    #[serde(rename = "focus")]
    Focus,
    #[serde(rename = "blur")]
    Blur,
    #[serde(rename = "focusin")]
    FocusIn,
    #[serde(rename = "focusout")]
    FocusOut,
    #[serde(rename = "compositionstart")]
    CompositionStart,
    #[serde(rename = "compositionupdate")]
    CompositionUpdate,
    #[serde(rename = "compositionend")]
    CompositionEnd,
    #[serde(rename = "beforeinput")]
    BeforeInput,
    #[serde(rename = "paste")]
    Paste,
    #[serde(rename = "copy")]
    Copy,
    #[serde(rename = "cut")]
    Cut,
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "selectstart")]
    SelectStart,
    #[serde(rename = "selectionchange")]
    SelectionChange,

    // Synthetic (control actions)
    #[serde(rename = "type-changed")]
    TypeChanged,
    #[serde(rename = "inputmode-changed")]
    InputModeChanged,
}

/// Event kinds registered on the widget at setup, in registration order
pub const MONITORED: [EventKind; 19] = [
    EventKind::Input,
    EventKind::Change,
    EventKind::KeyDown,
    EventKind::KeyUp,
    EventKind::KeyPress,
    EventKind::Focus,
    EventKind::Blur,
    EventKind::FocusIn,
    EventKind::FocusOut,
    EventKind::CompositionStart,
    EventKind::CompositionUpdate,
    EventKind::CompositionEnd,
    EventKind::BeforeInput,
    EventKind::Paste,
    EventKind::Copy,
    EventKind::Cut,
    EventKind::Select,
    EventKind::SelectStart,
    EventKind::SelectionChange,
];

/// Broad grouping used for colors and for deciding which payloads apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    Keyboard,
    Input,
    Composition,
    Focus,
    Clipboard,
    Selection,
    Synthetic,
}

impl EventKind {
    /// Name as registered on the widget (and shown in the log)
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Input => "input",
            EventKind::Change => "change",
            EventKind::KeyDown => "keydown",
            EventKind::KeyUp => "keyup",
            EventKind::KeyPress => "keypress",
            EventKind::Focus => "focus",
            EventKind::Blur => "blur",
            EventKind::FocusIn => "focusin",
            EventKind::FocusOut => "focusout",
            EventKind::CompositionStart => "compositionstart",
            EventKind::CompositionUpdate => "compositionupdate",
            EventKind::CompositionEnd => "compositionend",
            EventKind::BeforeInput => "beforeinput",
            EventKind::Paste => "paste",
            EventKind::Copy => "copy",
            EventKind::Cut => "cut",
            EventKind::Select => "select",
            EventKind::SelectStart => "selectstart",
            EventKind::SelectionChange => "selectionchange",
            EventKind::TypeChanged => "type-changed",
            EventKind::InputModeChanged => "inputmode-changed",
        }
    }

    pub fn class(&self) -> EventClass {
        match self {
            EventKind::KeyDown | EventKind::KeyUp | EventKind::KeyPress => EventClass::Keyboard,
            EventKind::Input | EventKind::Change | EventKind::BeforeInput => EventClass::Input,
            EventKind::CompositionStart
            | EventKind::CompositionUpdate
            | EventKind::CompositionEnd => EventClass::Composition,
            EventKind::Focus | EventKind::Blur | EventKind::FocusIn | EventKind::FocusOut => {
                EventClass::Focus
            }
            EventKind::Paste | EventKind::Copy | EventKind::Cut => EventClass::Clipboard,
            EventKind::Select | EventKind::SelectStart | EventKind::SelectionChange => {
                EventClass::Selection
            }
            EventKind::TypeChanged | EventKind::InputModeChanged => EventClass::Synthetic,
        }
    }

    /// Whether this kind comes from a control action rather than the widget
    pub fn is_synthetic(&self) -> bool {
        self.class() == EventClass::Synthetic
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties a fired event exposes
///
/// `None` means the event object does not have the property at all. For
/// `data`, `Some(None)` is a property that exists but is null (deletions).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEvent {
    pub key: Option<String>,
    pub code: Option<String>,
    pub key_code: Option<u32>,
    pub which: Option<u32>,
    pub char_code: Option<u32>,
    pub input_type: Option<String>,
    pub data: Option<Option<String>>,
    pub is_composing: Option<bool>,
    pub ctrl_key: Option<bool>,
    pub shift_key: Option<bool>,
    pub alt_key: Option<bool>,
    pub meta_key: Option<bool>,
    pub repeat: Option<bool>,
    pub location: Option<u8>,
    pub clipboard_data: Option<String>,
}

/// Keyboard properties of a key event, as the platform reports them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFields {
    pub key: String,
    pub code: String,
    pub key_code: u32,
    pub char_code: u32,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
    pub repeat: bool,
    pub location: u8,
    pub is_composing: bool,
}

impl RawEvent {
    /// An event exposing none of the optional properties (focus, select, change)
    pub fn plain() -> Self {
        Self::default()
    }

    /// keydown / keypress / keyup
    pub fn keyboard(fields: KeyFields) -> Self {
        Self {
            key: Some(fields.key),
            code: Some(fields.code),
            key_code: Some(fields.key_code),
            // `which` mirrors keyCode for keydown/keyup and charCode for keypress
            which: Some(if fields.char_code != 0 {
                fields.char_code
            } else {
                fields.key_code
            }),
            char_code: Some(fields.char_code),
            is_composing: Some(fields.is_composing),
            ctrl_key: Some(fields.ctrl),
            shift_key: Some(fields.shift),
            alt_key: Some(fields.alt),
            meta_key: Some(fields.meta),
            repeat: Some(fields.repeat),
            location: Some(fields.location),
            ..Self::default()
        }
    }

    /// beforeinput / input
    pub fn input(input_type: &str, data: Option<String>, is_composing: bool) -> Self {
        Self {
            input_type: Some(input_type.to_string()),
            data: Some(data),
            is_composing: Some(is_composing),
            ..Self::default()
        }
    }

    /// compositionstart / compositionupdate / compositionend
    pub fn composition(data: &str) -> Self {
        Self {
            data: Some(Some(data.to_string())),
            ..Self::default()
        }
    }

    /// copy / cut / paste; `payload` is `None` when the clipboard could not be read
    pub fn clipboard(payload: Option<String>) -> Self {
        Self {
            clipboard_data: payload,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_monitored_kinds_are_unique_and_platform_only() {
        let unique: HashSet<_> = MONITORED.iter().collect();
        assert_eq!(unique.len(), MONITORED.len());
        assert!(MONITORED.iter().all(|k| !k.is_synthetic()));
    }

    #[test]
    fn test_serialized_name_matches_as_str() {
        for kind in MONITORED
            .iter()
            .chain([EventKind::TypeChanged, EventKind::InputModeChanged].iter())
        {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_keyboard_which_follows_char_code_for_keypress() {
        let down = RawEvent::keyboard(KeyFields {
            key: "a".into(),
            code: "KeyA".into(),
            key_code: 65,
            ..Default::default()
        });
        assert_eq!(down.which, Some(65));

        let press = RawEvent::keyboard(KeyFields {
            key: "a".into(),
            code: "KeyA".into(),
            key_code: 97,
            char_code: 97,
            ..Default::default()
        });
        assert_eq!(press.which, Some(97));
    }

    #[test]
    fn test_input_with_null_data_keeps_property() {
        let raw = RawEvent::input("deleteContentBackward", None, false);
        assert_eq!(raw.data, Some(None));
        assert_eq!(RawEvent::plain().data, None);
    }
}
