//! Character width classification
//!
//! Classifies text by its UTF-16 code units: a unit at or below 0x7F is
//! "1byte", anything wider is "2byte". This is deliberately not a UTF-8
//! byte-length computation. A surrogate pair is two independent wide units.

use serde::Serialize;

/// Highest code unit still counted as single-byte (ASCII range)
const ASCII_MAX: u16 = 0x7F;

/// Width class of a single code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ByteType {
    #[serde(rename = "1byte")]
    OneByte,
    #[serde(rename = "2byte")]
    TwoByte,
}

impl ByteType {
    fn of_unit(unit: u16) -> Self {
        if unit <= ASCII_MAX {
            ByteType::OneByte
        } else {
            ByteType::TwoByte
        }
    }
}

/// Aggregate width counts over a whole value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteInfo {
    /// Number of UTF-16 code units
    pub total: usize,
    pub one_byte: usize,
    pub two_byte: usize,
}

/// Classify the first code unit of `text`
///
/// Returns `None` for empty input only.
pub fn classify(text: &str) -> Option<ByteType> {
    text.encode_utf16().next().map(ByteType::of_unit)
}

/// Count every code unit of `value` by width class
pub fn analyze(value: &str) -> ByteInfo {
    value
        .encode_utf16()
        .fold(ByteInfo::default(), |mut info, unit| {
            info.total += 1;
            match ByteType::of_unit(unit) {
                ByteType::OneByte => info.one_byte += 1,
                ByteType::TwoByte => info.two_byte += 1,
            }
            info
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_empty_is_absent() {
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_classify_uses_first_unit_only() {
        assert_eq!(classify("a"), Some(ByteType::OneByte));
        assert_eq!(classify("aあ"), Some(ByteType::OneByte));
        assert_eq!(classify("あa"), Some(ByteType::TwoByte));
        assert_eq!(classify("\u{7F}"), Some(ByteType::OneByte));
        assert_eq!(classify("\u{80}"), Some(ByteType::TwoByte));
        assert_eq!(classify("é"), Some(ByteType::TwoByte));
        // Named keys classify by their first letter
        assert_eq!(classify("Enter"), Some(ByteType::OneByte));
    }

    #[test]
    fn test_classify_astral_is_two_byte() {
        // First unit is a high surrogate, which is > 0x7F
        assert_eq!(classify("😀"), Some(ByteType::TwoByte));
    }

    #[test]
    fn test_analyze_empty() {
        assert_eq!(analyze(""), ByteInfo::default());
    }

    #[test]
    fn test_analyze_counts_code_units() {
        let info = analyze("Aあ😀");
        // A = 1 unit, あ = 1 unit, 😀 = surrogate pair (2 units)
        assert_eq!(info.total, 4);
        assert_eq!(info.one_byte, 1);
        assert_eq!(info.two_byte, 3);
    }

    #[test]
    fn test_analyze_parts_sum_to_total() {
        for value in ["", "hello", "こんにちは", "mixed テキスト 123", "🎉🎉", "\u{0}\u{7F}\u{80}"] {
            let info = analyze(value);
            assert_eq!(info.one_byte + info.two_byte, info.total, "value {:?}", value);
            assert_eq!(info.total, value.encode_utf16().count(), "value {:?}", value);
        }
    }

    #[test]
    fn test_byte_info_serializes_camel_case() {
        let json = serde_json::to_string(&analyze("A")).unwrap();
        assert_eq!(json, r#"{"total":1,"oneByte":1,"twoByte":0}"#);
    }
}
