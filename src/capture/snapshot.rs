//! Event snapshots
//!
//! An `EventSnapshot` is the immutable record of one firing: widget state at
//! that instant, the properties the event exposed, and the derived width
//! classifications. Every field is optional and absent fields are skipped
//! on serialization, so "present" always means "the event had it".

use super::bytes::{ByteInfo, ByteType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_end: Option<usize>,

    // Keyboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub which: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_code: Option<u32>,

    // Input / composition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// `Some(None)` serializes as `null`: the event had `data`, but it was null
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_composing: Option<bool>,

    // Modifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctrl_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipboard_data: Option<String>,

    // Derived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_byte_type: Option<ByteType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_byte_type: Option<ByteType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_byte_info: Option<ByteInfo>,

    // Synthetic entries only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_input_mode: Option<String>,
}

impl EventSnapshot {
    /// Snapshot with no fields at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Payload of the synthetic entry logged when the widget type changes
    pub fn type_changed(new_type: &str) -> Self {
        Self {
            new_type: Some(new_type.to_string()),
            ..Self::default()
        }
    }

    /// Payload of the synthetic entry logged when the input-mode hint changes
    ///
    /// `new_input_mode` is `""` when the hint was removed.
    pub fn input_mode_changed(new_input_mode: &str) -> Self {
        Self {
            new_input_mode: Some(new_input_mode.to_string()),
            ..Self::default()
        }
    }

    /// The snapshot as a JSON object, fields in capture order
    pub fn to_json(&self) -> serde_json::Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A struct of plain options always serializes to an object
            _ => serde_json::Map::new(),
        }
    }

    /// Fields worth showing: everything except the timestamp, minus
    /// null and empty-string values
    pub fn display_fields(&self) -> Vec<(String, Value)> {
        self.to_json()
            .into_iter()
            .filter(|(name, _)| name != "timestamp")
            .filter(|(_, value)| !is_blank(value))
            .collect()
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_serializes_to_empty_object() {
        let json = serde_json::to_string(&EventSnapshot::empty()).unwrap();
        assert_eq!(json, "{}");
        assert_eq!(EventSnapshot::empty(), EventSnapshot::default());
    }

    #[test]
    fn test_null_data_is_present_but_not_displayed() {
        let snapshot = EventSnapshot {
            value: Some("ab".into()),
            data: Some(None),
            ..Default::default()
        };
        let json = snapshot.to_json();
        assert_eq!(json.get("data"), Some(&Value::Null));

        let names: Vec<_> = snapshot
            .display_fields()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["value"]);
    }

    #[test]
    fn test_display_fields_skip_timestamp_and_empty_strings() {
        let snapshot = EventSnapshot {
            timestamp: Some(Utc::now()),
            value: Some(String::new()),
            selection_start: Some(0),
            selection_end: Some(0),
            ..Default::default()
        };
        let names: Vec<_> = snapshot
            .display_fields()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["selectionStart", "selectionEnd"]);
    }

    #[test]
    fn test_field_order_follows_declaration() {
        let snapshot = EventSnapshot {
            value: Some("x".into()),
            key: Some("x".into()),
            key_byte_type: Some(ByteType::OneByte),
            value_byte_info: Some(ByteInfo {
                total: 1,
                one_byte: 1,
                two_byte: 0,
            }),
            ..Default::default()
        };
        let names: Vec<_> = snapshot.to_json().keys().cloned().collect();
        assert_eq!(names, vec!["value", "key", "keyByteType", "valueByteInfo"]);
    }

    #[test]
    fn test_synthetic_payloads_carry_only_new_value() {
        let json = serde_json::to_string(&EventSnapshot::type_changed("password")).unwrap();
        assert_eq!(json, r#"{"newType":"password"}"#);

        let json = serde_json::to_string(&EventSnapshot::input_mode_changed("")).unwrap();
        assert_eq!(json, r#"{"newInputMode":""}"#);
    }
}
