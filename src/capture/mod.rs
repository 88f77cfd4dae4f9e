// Capture module - turns event firings into snapshots
//
// Every monitored kind is bound to the same capture function through a
// static listener table. Capture reads value and selection from the widget
// at the moment of the call, copies whatever the raw event exposes, and adds
// the derived width classifications. It never fails: a missing raw event
// yields an empty snapshot.

pub mod bytes;
pub mod snapshot;

pub use bytes::{analyze, classify};
pub use snapshot::EventSnapshot;

use crate::events::{EventClass, EventKind, RawEvent, MONITORED};
use chrono::{DateTime, Utc};

/// Read access to the widget state a snapshot records
pub trait InputState {
    /// Full current content
    fn value(&self) -> &str;

    /// Selection start as a UTF-16 offset, `None` when the widget type has no selection API
    fn selection_start(&self) -> Option<usize>;

    /// Selection end as a UTF-16 offset, `None` when the widget type has no selection API
    fn selection_end(&self) -> Option<usize>;
}

/// Signature shared by every listener in the table
pub type CaptureFn = fn(EventKind, Option<&RawEvent>, &dyn InputState) -> EventSnapshot;

/// Listener table: one entry per monitored kind, registered once at setup
pub static LISTENERS: [(EventKind, CaptureFn); MONITORED.len()] = listener_table();

/// Bind every monitored kind, in registration order, to `capture`
const fn listener_table() -> [(EventKind, CaptureFn); MONITORED.len()] {
    let mut table = [(MONITORED[0], capture as CaptureFn); MONITORED.len()];
    let mut i = 1;
    while i < MONITORED.len() {
        table[i] = (MONITORED[i], capture as CaptureFn);
        i += 1;
    }
    table
}

/// Find the listener bound to `kind`
///
/// Synthetic kinds have no listener: they never come from the widget.
pub fn listener_for(kind: EventKind) -> Option<CaptureFn> {
    LISTENERS
        .iter()
        .find(|(registered, _)| *registered == kind)
        .map(|(_, listener)| *listener)
}

/// Build the snapshot for one firing, stamped with the current time
pub fn capture(kind: EventKind, raw: Option<&RawEvent>, state: &dyn InputState) -> EventSnapshot {
    capture_at(kind, raw, state, Utc::now())
}

/// Build the snapshot for one firing with an explicit capture instant
pub fn capture_at(
    kind: EventKind,
    raw: Option<&RawEvent>,
    state: &dyn InputState,
    now: DateTime<Utc>,
) -> EventSnapshot {
    let Some(raw) = raw else {
        return EventSnapshot::empty();
    };

    let value = state.value().to_string();

    let clipboard_data = if kind.class() == EventClass::Clipboard {
        raw.clipboard_data.clone()
    } else {
        None
    };

    let key_byte_type = raw.key.as_deref().and_then(classify);
    let data_byte_type = raw.data.as_ref().and_then(|d| d.as_deref()).and_then(classify);

    EventSnapshot {
        timestamp: Some(now),
        value_byte_info: Some(analyze(&value)),
        value: Some(value),
        selection_start: state.selection_start(),
        selection_end: state.selection_end(),
        key: raw.key.clone(),
        code: raw.code.clone(),
        key_code: raw.key_code,
        which: raw.which,
        char_code: raw.char_code,
        input_type: raw.input_type.clone(),
        data: raw.data.clone(),
        is_composing: raw.is_composing,
        ctrl_key: raw.ctrl_key,
        shift_key: raw.shift_key,
        alt_key: raw.alt_key,
        meta_key: raw.meta_key,
        repeat: raw.repeat,
        location: raw.location,
        clipboard_data,
        key_byte_type,
        data_byte_type,
        new_type: None,
        new_input_mode: None,
    }
}
