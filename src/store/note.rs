//! Note model

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Message returned by a successful reset
pub const RESET_MESSAGE: &str = "Notes table has been reset";

/// A persisted note. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub contents: String,
}

/// Fields supplied by a client when creating a note.
///
/// Both fields are optional on the wire and take any scalar: numbers and
/// booleans are stored in their text form, `null` or a missing field as an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewNote {
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub contents: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contents: contents.into(),
        }
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarText)
}

struct ScalarText;

impl<'de> Visitor<'de> for ScalarText {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Descriptor returned by `reset_notes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetOutcome {
    pub success: bool,
    pub message: String,
}

impl ResetOutcome {
    pub fn done() -> Self {
        Self {
            success: true,
            message: RESET_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_note_serialization() {
        let note = Note {
            id: 1,
            title: "a".to_string(),
            contents: "b".to_string(),
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value, json!({"id": 1, "title": "a", "contents": "b"}));
    }

    #[test]
    fn test_new_note_missing_fields_default_to_empty() {
        let note: NewNote = serde_json::from_value(json!({"title": "only title"})).unwrap();
        assert_eq!(note.title, "only title");
        assert_eq!(note.contents, "");

        let empty: NewNote = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, NewNote::default());
    }

    #[test]
    fn test_new_note_accepts_any_scalar() {
        let note: NewNote = serde_json::from_value(json!({"title": 5, "contents": true})).unwrap();
        assert_eq!(note, NewNote::new("5", "true"));

        let note: NewNote = serde_json::from_value(json!({"title": null, "contents": 1.5})).unwrap();
        assert_eq!(note, NewNote::new("", "1.5"));

        let note: NewNote = serde_json::from_value(json!({"title": -3})).unwrap();
        assert_eq!(note.title, "-3");
    }

    #[test]
    fn test_new_note_rejects_nested_values() {
        let result = serde_json::from_value::<NewNote>(json!({"title": ["a", "b"]}));
        assert!(result.is_err());
    }

    #[test]
    fn test_reset_outcome_shape() {
        let value = serde_json::to_value(ResetOutcome::done()).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "message": "Notes table has been reset"})
        );
    }
}
