//! Key property mapping
//!
//! Derives the browser keyboard properties (`key`, `code`, `keyCode`,
//! `charCode`, `location`, modifiers) from a crossterm key event. Physical
//! `code` values assume a US layout since terminals only report the
//! produced character.

use crate::events::KeyFields;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MediaKeyCode, ModifierKeyCode,
};

/// keyCode reported for keydown while an IME composition is in progress
pub const COMPOSITION_KEY_CODE: u32 = 229;

/// DOM `location` values
const LOCATION_STANDARD: u8 = 0;
const LOCATION_LEFT: u8 = 1;
const LOCATION_RIGHT: u8 = 2;
const LOCATION_NUMPAD: u8 = 3;

/// Properties for keydown / keyup
pub fn key_fields(event: &KeyEvent) -> KeyFields {
    let keypad = event.state.contains(KeyEventState::KEYPAD);
    KeyFields {
        key: key_name(event),
        code: physical_code(&event.code, keypad),
        key_code: legacy_key_code(&event.code),
        char_code: 0,
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
        alt: event.modifiers.contains(KeyModifiers::ALT),
        meta: event
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
        repeat: event.kind == KeyEventKind::Repeat,
        location: location(&event.code, keypad),
        is_composing: false,
    }
}

/// Properties for keypress: keyCode and charCode both carry the character
///
/// Returns `None` for keys that do not produce a keypress (non-printables
/// other than Enter, and Ctrl/Alt chords).
pub fn keypress_fields(event: &KeyEvent) -> Option<KeyFields> {
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let char_code = match event.code {
        KeyCode::Char(c) => c as u32,
        KeyCode::Enter => 13,
        _ => return None,
    };

    let mut fields = key_fields(event);
    fields.key_code = char_code;
    fields.char_code = char_code;
    Some(fields)
}

/// The `key` property: produced character or named key
pub fn key_name(event: &KeyEvent) -> String {
    match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Left => "ArrowLeft".into(),
        KeyCode::Right => "ArrowRight".into(),
        KeyCode::Up => "ArrowUp".into(),
        KeyCode::Down => "ArrowDown".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PageUp".into(),
        KeyCode::PageDown => "PageDown".into(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".into(),
        KeyCode::Delete => "Delete".into(),
        KeyCode::Insert => "Insert".into(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Esc => "Escape".into(),
        KeyCode::CapsLock => "CapsLock".into(),
        KeyCode::ScrollLock => "ScrollLock".into(),
        KeyCode::NumLock => "NumLock".into(),
        KeyCode::PrintScreen => "PrintScreen".into(),
        KeyCode::Pause => "Pause".into(),
        KeyCode::Menu => "ContextMenu".into(),
        KeyCode::KeypadBegin => "Clear".into(),
        KeyCode::Media(media) => media_key_name(media).into(),
        KeyCode::Modifier(modifier) => modifier_key_name(modifier).into(),
        KeyCode::Null => "Unidentified".into(),
    }
}

fn media_key_name(media: MediaKeyCode) -> &'static str {
    match media {
        MediaKeyCode::Play => "MediaPlay",
        MediaKeyCode::Pause => "MediaPause",
        MediaKeyCode::PlayPause => "MediaPlayPause",
        MediaKeyCode::Reverse => "MediaRewind",
        MediaKeyCode::Stop => "MediaStop",
        MediaKeyCode::FastForward => "MediaFastForward",
        MediaKeyCode::Rewind => "MediaRewind",
        MediaKeyCode::TrackNext => "MediaTrackNext",
        MediaKeyCode::TrackPrevious => "MediaTrackPrevious",
        MediaKeyCode::Record => "MediaRecord",
        MediaKeyCode::LowerVolume => "AudioVolumeDown",
        MediaKeyCode::RaiseVolume => "AudioVolumeUp",
        MediaKeyCode::MuteVolume => "AudioVolumeMute",
    }
}

fn modifier_key_name(modifier: ModifierKeyCode) -> &'static str {
    match modifier {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift",
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Control",
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => "Alt",
        ModifierKeyCode::LeftSuper
        | ModifierKeyCode::RightSuper
        | ModifierKeyCode::LeftMeta
        | ModifierKeyCode::RightMeta => "Meta",
        ModifierKeyCode::LeftHyper | ModifierKeyCode::RightHyper => "Hyper",
        ModifierKeyCode::IsoLevel3Shift => "AltGraph",
        ModifierKeyCode::IsoLevel5Shift => "Level5Shift",
    }
}

/// The `code` property (physical key on a US layout)
pub fn physical_code(code: &KeyCode, keypad: bool) -> String {
    match code {
        KeyCode::Char(c) => char_code_name(*c, keypad),
        KeyCode::Enter if keypad => "NumpadEnter".into(),
        KeyCode::Modifier(modifier) => match modifier {
            ModifierKeyCode::LeftShift => "ShiftLeft",
            ModifierKeyCode::RightShift => "ShiftRight",
            ModifierKeyCode::LeftControl => "ControlLeft",
            ModifierKeyCode::RightControl => "ControlRight",
            ModifierKeyCode::LeftAlt => "AltLeft",
            ModifierKeyCode::RightAlt | ModifierKeyCode::IsoLevel3Shift => "AltRight",
            ModifierKeyCode::LeftSuper | ModifierKeyCode::LeftMeta => "MetaLeft",
            ModifierKeyCode::RightSuper | ModifierKeyCode::RightMeta => "MetaRight",
            _ => "",
        }
        .into(),
        // Named keys share their code with their key name
        other => key_name(&KeyEvent::new(*other, KeyModifiers::NONE)),
    }
}

fn char_code_name(c: char, keypad: bool) -> String {
    if keypad {
        match c {
            '0'..='9' => return format!("Numpad{}", c),
            '+' => return "NumpadAdd".into(),
            '-' => return "NumpadSubtract".into(),
            '*' => return "NumpadMultiply".into(),
            '/' => return "NumpadDivide".into(),
            '.' => return "NumpadDecimal".into(),
            _ => {}
        }
    }

    if c.is_ascii_alphabetic() {
        return format!("Key{}", c.to_ascii_uppercase());
    }

    let digit = match c {
        '0'..='9' => Some(c),
        ')' => Some('0'),
        '!' => Some('1'),
        '@' => Some('2'),
        '#' => Some('3'),
        '$' => Some('4'),
        '%' => Some('5'),
        '^' => Some('6'),
        '&' => Some('7'),
        '*' => Some('8'),
        '(' => Some('9'),
        _ => None,
    };
    if let Some(d) = digit {
        return format!("Digit{}", d);
    }

    match c {
        ' ' => "Space",
        '-' | '_' => "Minus",
        '=' | '+' => "Equal",
        '[' | '{' => "BracketLeft",
        ']' | '}' => "BracketRight",
        '\\' | '|' => "Backslash",
        ';' | ':' => "Semicolon",
        '\'' | '"' => "Quote",
        ',' | '<' => "Comma",
        '.' | '>' => "Period",
        '/' | '?' => "Slash",
        '`' | '~' => "Backquote",
        _ => "",
    }
    .into()
}

/// Legacy `keyCode` for keydown / keyup (0 when there is no mapping)
pub fn legacy_key_code(code: &KeyCode) -> u32 {
    match code {
        KeyCode::Char(c) => legacy_char_key_code(*c),
        KeyCode::Backspace => 8,
        KeyCode::Tab | KeyCode::BackTab => 9,
        KeyCode::Enter => 13,
        KeyCode::Pause => 19,
        KeyCode::CapsLock => 20,
        KeyCode::Esc => 27,
        KeyCode::PageUp => 33,
        KeyCode::PageDown => 34,
        KeyCode::End => 35,
        KeyCode::Home => 36,
        KeyCode::Left => 37,
        KeyCode::Up => 38,
        KeyCode::Right => 39,
        KeyCode::Down => 40,
        KeyCode::PrintScreen => 44,
        KeyCode::Insert => 45,
        KeyCode::Delete => 46,
        KeyCode::Menu => 93,
        KeyCode::F(n) => 111 + u32::from(*n),
        KeyCode::NumLock => 144,
        KeyCode::ScrollLock => 145,
        KeyCode::Modifier(modifier) => match modifier {
            ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => 16,
            ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => 17,
            ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => 18,
            ModifierKeyCode::LeftSuper | ModifierKeyCode::LeftMeta => 91,
            ModifierKeyCode::RightSuper | ModifierKeyCode::RightMeta => 92,
            _ => 0,
        },
        _ => 0,
    }
}

fn legacy_char_key_code(c: char) -> u32 {
    match c {
        'a'..='z' => c.to_ascii_uppercase() as u32,
        'A'..='Z' | '0'..='9' | ' ' => c as u32,
        ')' => 48,
        '!' => 49,
        '@' => 50,
        '#' => 51,
        '$' => 52,
        '%' => 53,
        '^' => 54,
        '&' => 55,
        '*' => 56,
        '(' => 57,
        ';' | ':' => 186,
        '=' | '+' => 187,
        ',' | '<' => 188,
        '-' | '_' => 189,
        '.' | '>' => 190,
        '/' | '?' => 191,
        '`' | '~' => 192,
        '[' | '{' => 219,
        '\\' | '|' => 220,
        ']' | '}' => 221,
        '\'' | '"' => 222,
        _ => 0,
    }
}

fn location(code: &KeyCode, keypad: bool) -> u8 {
    if keypad {
        return LOCATION_NUMPAD;
    }
    match code {
        KeyCode::Modifier(modifier) => match modifier {
            ModifierKeyCode::LeftShift
            | ModifierKeyCode::LeftControl
            | ModifierKeyCode::LeftAlt
            | ModifierKeyCode::LeftSuper
            | ModifierKeyCode::LeftMeta
            | ModifierKeyCode::LeftHyper => LOCATION_LEFT,
            ModifierKeyCode::RightShift
            | ModifierKeyCode::RightControl
            | ModifierKeyCode::RightAlt
            | ModifierKeyCode::RightSuper
            | ModifierKeyCode::RightMeta
            | ModifierKeyCode::RightHyper => LOCATION_RIGHT,
            _ => LOCATION_STANDARD,
        },
        _ => LOCATION_STANDARD,
    }
}
