// Controls - type and inputmode selectors
//
// Changes apply to the input immediately and append a synthetic entry to the
// log. Synthetic entries bypass the listener table: they carry only the new
// value and get their time at append.

use crate::capture::EventSnapshot;
use crate::event_log::EventLog;
use crate::events::EventKind;
use crate::widget::{InputMode, InputType, TextInput};

/// Set the input's type and log `type-changed`
pub fn change_type(input: &mut TextInput, log: &mut EventLog, input_type: InputType) {
    input.set_type(input_type);
    tracing::debug!("Input type set to {}", input_type.as_str());
    log.append(
        EventKind::TypeChanged,
        EventSnapshot::type_changed(input_type.as_str()),
    );
}

/// Set (or with `None`, remove) the inputmode hint and log `inputmode-changed`
pub fn change_input_mode(input: &mut TextInput, log: &mut EventLog, mode: Option<InputMode>) {
    input.set_input_mode(mode);
    let value = InputMode::option_value(mode);
    if mode.is_none() {
        tracing::debug!("Input mode attribute removed");
    } else {
        tracing::debug!("Input mode set to {}", value);
    }
    log.append(
        EventKind::InputModeChanged,
        EventSnapshot::input_mode_changed(value),
    );
}

/// F2 / Shift+F2
pub fn cycle_type(input: &mut TextInput, log: &mut EventLog, forward: bool) {
    let current = input.input_type();
    let next = if forward { current.next() } else { current.prev() };
    change_type(input, log, next);
}

/// F3 / Shift+F3
pub fn cycle_input_mode(input: &mut TextInput, log: &mut EventLog, forward: bool) {
    let current = input.input_mode();
    let next = if forward {
        InputMode::next_option(current)
    } else {
        InputMode::prev_option(current)
    };
    change_input_mode(input, log, next);
}
