// Rust guideline compliant 2026-10-18

//! Parsing strategies for raw inventory records.
//!
//! A record is first decoded as JSON. When that fails, the raw text is kept
//! and its fields are pulled out with literal-key patterns instead, so a
//! single malformed entry never aborts a run.

use crate::models::SystemRecord;
use regex::Regex;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

static DISPLAY_NAME_PATTERN: OnceLock<Regex> = OnceLock::new();
static SYSTEM_NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn display_name_pattern() -> &'static Regex {
    DISPLAY_NAME_PATTERN.get_or_init(|| {
        Regex::new(r#""systemDisplayName":"([^"]+)""#).expect("display name pattern is valid")
    })
}

fn system_name_pattern() -> &'static Regex {
    SYSTEM_NAME_PATTERN
        .get_or_init(|| Regex::new(r#""systemName":"([^"]+)""#).expect("system name pattern is valid"))
}

/// A raw record classified by the strategy that can read it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRecord<'a> {
    /// The record text decoded into a JSON object.
    Structured(SystemRecord),
    /// The record text is not a decodable object; fields come from patterns.
    Fallback(&'a str),
    /// The entry is not text at all.
    Unreadable,
}

impl<'a> ParsedRecord<'a> {
    /// Classifies a raw inventory entry.
    ///
    /// # Arguments
    ///
    /// * `raw` - One element of `ownSystemArr` or `shareSystemArr`
    ///
    /// # Returns
    ///
    /// `Structured` when the text decodes, `Fallback` when it is text that does
    /// not, `Unreadable` for non-string entries.
    pub fn classify(raw: &'a Value) -> Self {
        let Some(text) = raw.as_str() else {
            tracing::warn!(entry = %raw, "skipping non-text system record");
            return ParsedRecord::Unreadable;
        };

        match decode_structured(text) {
            Ok(record) => ParsedRecord::Structured(record),
            Err(err) => {
                tracing::debug!(error = %err, "record is not valid JSON, using pattern fallback");
                ParsedRecord::Fallback(text)
            }
        }
    }

    /// Display name as used for diagnostics listings.
    ///
    /// Structured records without a name report `N/A`; fallback records report
    /// nothing unless the pattern finds a name.
    pub fn listing_name(&self) -> Option<String> {
        match self {
            ParsedRecord::Structured(record) => Some(
                record
                    .display_name
                    .clone()
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
            ParsedRecord::Fallback(text) => extract_display_name(text).map(str::to_string),
            ParsedRecord::Unreadable => None,
        }
    }
}

/// Decodes record text into a [`SystemRecord`].
///
/// # Errors
///
/// Returns an error if the text is not JSON, is JSON but not an object, or
/// carries fields of the wrong type. A `systemKey` of `null` counts as the
/// wrong type.
pub fn decode_structured(text: &str) -> serde_json::Result<SystemRecord> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom("system record is not a JSON object"));
    }
    SystemRecord::deserialize(value)
}

/// Extracts the first `"systemDisplayName":"..."` value from raw text.
pub fn extract_display_name(text: &str) -> Option<&str> {
    first_capture(display_name_pattern(), text)
}

/// Extracts the first `"systemName":"..."` value from raw text.
pub fn extract_system_name(text: &str) -> Option<&str> {
    first_capture(system_name_pattern(), text)
}

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_valid_record() {
        let raw = json!(r#"{"systemDisplayName":"web-01","systemKey":{"systemName":"sys-123"}}"#);
        match ParsedRecord::classify(&raw) {
            ParsedRecord::Structured(record) => {
                assert_eq!(record.display_name.as_deref(), Some("web-01"));
                assert_eq!(record.system_id(), Some("sys-123"));
            }
            other => panic!("expected structured record, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_malformed_text_falls_back() {
        let raw = json!(r#"{"systemDisplayName":"web-01","systemKey":{"systemName":"sys-123"}"#);
        assert!(matches!(ParsedRecord::classify(&raw), ParsedRecord::Fallback(_)));
    }

    #[test]
    fn test_classify_non_object_json_falls_back() {
        let raw = json!(r#"["systemDisplayName"]"#);
        assert!(matches!(ParsedRecord::classify(&raw), ParsedRecord::Fallback(_)));
    }

    #[test]
    fn test_classify_null_system_key_falls_back() {
        let raw = json!(r#"{"systemDisplayName":"web","systemKey":null}"#);
        assert!(matches!(ParsedRecord::classify(&raw), ParsedRecord::Fallback(_)));

        let absent = json!(r#"{"systemDisplayName":"web"}"#);
        assert!(matches!(ParsedRecord::classify(&absent), ParsedRecord::Structured(_)));
    }

    #[test]
    fn test_classify_non_string_entry_is_unreadable() {
        assert_eq!(ParsedRecord::classify(&json!(42)), ParsedRecord::Unreadable);
        assert_eq!(
            ParsedRecord::classify(&json!({"systemDisplayName": "web-01"})),
            ParsedRecord::Unreadable
        );
    }

    #[test]
    fn test_extract_takes_first_occurrence() {
        let text = r#"junk "systemName":"first" "systemName":"second""#;
        assert_eq!(extract_system_name(text), Some("first"));
    }

    #[test]
    fn test_extract_requires_literal_key_layout() {
        assert_eq!(extract_display_name(r#""systemDisplayName": "spaced""#), None);
        assert_eq!(extract_display_name(r#""systemDisplayName":"""#), None);
    }

    #[test]
    fn test_listing_name_defaults() {
        let raw = json!(r#"{"systemKey":{"systemName":"sys-1"}}"#);
        assert_eq!(
            ParsedRecord::classify(&raw).listing_name().as_deref(),
            Some("N/A")
        );

        let broken = json!("not json at all");
        assert_eq!(ParsedRecord::classify(&broken).listing_name(), None);
    }
}
